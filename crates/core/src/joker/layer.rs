use super::{invoke_joker, Hook, HookContext, HookSet, JokerEffect, JokerRegistry};
use crate::Card;

/// One pending "run hook on the joker at `index`" call.
pub struct JokerCall<'c, 'a> {
    pub registry: &'c JokerRegistry,
    pub jokers: &'c mut [Card],
    pub index: usize,
    pub hook: Hook,
    pub ctx: &'c mut HookContext<'a>,
}

impl JokerCall<'_, '_> {
    /// Index `offset` slots away from this joker, if inside the hand.
    pub fn neighbor(&self, offset: isize) -> Option<usize> {
        let target = self.index.checked_add_signed(offset)?;
        (target < self.jokers.len()).then_some(target)
    }

    pub fn implements(&self, index: usize) -> bool {
        self.jokers
            .get(index)
            .and_then(|card| card.joker.as_ref())
            .and_then(|joker| self.registry.get(&joker.kind))
            .is_some_and(|joker_type| joker_type.implements(self.hook))
    }

    /// Runs the same hook on another joker through its own dispatch.
    pub fn invoke(&mut self, index: usize) {
        invoke_joker(JokerCall {
            registry: self.registry,
            jokers: &mut *self.jokers,
            index,
            hook: self.hook,
            ctx: &mut *self.ctx,
        });
    }

    /// Runs `effect` against this joker's own state.
    pub fn run_own(self, effect: &dyn JokerEffect) {
        let JokerCall {
            jokers,
            index,
            hook,
            ctx,
            ..
        } = self;
        let Some(joker) = jokers.get_mut(index).and_then(|card| card.joker.as_mut()) else {
            return;
        };
        let previous = ctx.joker_index.replace(index);
        effect.call(hook, joker, ctx);
        ctx.joker_index = previous;
    }
}

/// Interception wrapped around a joker type's effect.
pub trait HookLayer: Send + Sync {
    fn name(&self) -> &'static str;

    /// Hooks this layer takes over; the rest go straight to the effect.
    fn intercepts(&self) -> HookSet;

    fn intercept(&self, call: JokerCall<'_, '_>, own: &dyn JokerEffect);
}

/// Hands the hook to the joker on the left when it implements it, otherwise
/// runs its own effect. One level only; the neighbor may be a mirror itself.
#[derive(Debug, Clone, Copy)]
pub struct Mirror {
    hooks: HookSet,
}

impl Mirror {
    pub fn new() -> Self {
        Self::for_hooks(HookSet::ALL)
    }

    pub fn for_hooks(hooks: HookSet) -> Self {
        Self { hooks }
    }
}

impl Default for Mirror {
    fn default() -> Self {
        Self::new()
    }
}

impl HookLayer for Mirror {
    fn name(&self) -> &'static str {
        "mirror"
    }

    fn intercepts(&self) -> HookSet {
        self.hooks
    }

    fn intercept(&self, mut call: JokerCall<'_, '_>, own: &dyn JokerEffect) {
        match call.neighbor(-1) {
            Some(left) if call.implements(left) => call.invoke(left),
            _ => call.run_own(own),
        }
    }
}

/// Runs the hook on every joker to the left, nearest first, then its own effect.
#[derive(Debug, Clone, Copy)]
pub struct Blueprint {
    hooks: HookSet,
}

impl Blueprint {
    pub fn new() -> Self {
        Self::for_hooks(HookSet::ALL)
    }

    pub fn for_hooks(hooks: HookSet) -> Self {
        Self { hooks }
    }
}

impl Default for Blueprint {
    fn default() -> Self {
        Self::new()
    }
}

impl HookLayer for Blueprint {
    fn name(&self) -> &'static str {
        "blueprint"
    }

    fn intercepts(&self) -> HookSet {
        self.hooks
    }

    fn intercept(&self, mut call: JokerCall<'_, '_>, own: &dyn JokerEffect) {
        for left in (0..call.index).rev() {
            call.invoke(left);
        }
        call.run_own(own);
    }
}
