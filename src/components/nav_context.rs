use crate::content::Target;
use yew::prelude::*;

// Shared navigation entry point so sections can follow targets without prop drilling
#[derive(Clone, PartialEq)]
pub struct NavContext {
    pub navigate: Callback<Target>,
}

/// Click handler for `target`; `None` when there is nowhere to go or no provider.
pub fn follow_handler(ctx: Option<NavContext>, target: Option<Target>) -> Option<Callback<MouseEvent>> {
    let ctx = ctx?;
    let target = target?;
    Some(Callback::from(move |_| ctx.navigate.emit(target.clone())))
}

#[hook]
pub fn use_follow(target: Option<Target>) -> Option<Callback<MouseEvent>> {
    let ctx = use_context::<NavContext>();
    follow_handler(ctx, target)
}
