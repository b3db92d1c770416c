use super::{action_button::ActionButton, nav_context::use_follow};
use crate::content::Action;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct MobileMenuProps {
    pub show: bool,
    pub nav: Vec<Action>,
}

#[function_component(MobileMenu)]
pub fn mobile_menu(props: &MobileMenuProps) -> Html {
    if !props.show {
        return html! {};
    }
    html! {
        <div class="mobile-only" style="background:rgba(0,0,0,0.95); border-bottom:1px solid rgba(255,255,255,0.1);">
            <div style="display:flex; flex-direction:column; gap:24px; padding:32px;">
                { for props.nav.iter().map(|a| if a.primary {
                    html! { <ActionButton action={a.clone()} block={true} /> }
                } else {
                    html! { <MobileLink action={a.clone()} /> }
                }) }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
struct MobileLinkProps {
    action: Action,
}

#[function_component(MobileLink)]
fn mobile_link(props: &MobileLinkProps) -> Html {
    let onclick = use_follow(Some(props.action.target.clone()));
    html! {
        <button {onclick} style="background:none; border:none; color:#d1d5db; text-align:left; font-size:16px; cursor:pointer;">
            { props.action.label.clone() }
        </button>
    }
}
