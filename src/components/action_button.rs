use super::nav_context::use_follow;
use crate::content::Action;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ActionButtonProps {
    pub action: Action,
    /// Full-width, used inside the mobile panel.
    #[prop_or_default]
    pub block: bool,
}

#[function_component(ActionButton)]
pub fn action_button(props: &ActionButtonProps) -> Html {
    let onclick = use_follow(Some(props.action.target.clone()));
    let base = if props.action.primary {
        "background:#2563eb; color:#fff; border:none; font-weight:700;"
    } else {
        "background:rgba(255,255,255,0.05); color:#fff; border:1px solid rgba(255,255,255,0.1); font-weight:700;"
    };
    let size = if props.block {
        "width:100%; padding:12px 20px; border-radius:12px;"
    } else {
        "padding:14px 28px; border-radius:16px;"
    };
    html! {
        <button {onclick} style={format!("{} {} cursor:pointer; font-size:15px;", base, size)}>
            { props.action.label.clone() }
        </button>
    }
}
