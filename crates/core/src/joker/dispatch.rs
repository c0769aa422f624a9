use super::{Hook, HookContext, JokerCall, JokerRegistry};
use crate::Card;
use tracing::{debug, warn};

/// Fires `hook` on every joker in hand order.
pub fn dispatch_hook(
    registry: &JokerRegistry,
    jokers: &mut [Card],
    hook: Hook,
    ctx: &mut HookContext<'_>,
) {
    debug!(hook = hook.name(), jokers = jokers.len(), "dispatching hook");
    for index in 0..jokers.len() {
        invoke_joker(JokerCall {
            registry,
            jokers: &mut *jokers,
            index,
            hook,
            ctx: &mut *ctx,
        });
    }
}

/// Fires the call's hook on the single joker at `call.index`, through its layer.
pub fn invoke_joker(call: JokerCall<'_, '_>) {
    let registry = call.registry;
    let Some(kind) = call
        .jokers
        .get(call.index)
        .and_then(|card| card.joker.as_ref())
        .map(|joker| joker.kind.as_str())
    else {
        return;
    };
    let Some(joker_type) = registry.get(kind) else {
        warn!(kind, index = call.index, "joker type not registered, skipping");
        return;
    };
    joker_type.invoke(call);
}
