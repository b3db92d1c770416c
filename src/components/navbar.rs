use super::{action_button::ActionButton, mobile_menu::MobileMenu, nav_context::use_follow};
use crate::content::{Action, Target};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct NavbarProps {
    pub org_name: String,
    pub nav: Vec<Action>,
    pub scrolled: bool,
    pub menu_open: bool,
    pub on_toggle_menu: Callback<()>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let to_top = use_follow(Some(Target::Top));
    let toggle_cb = {
        let cb = props.on_toggle_menu.clone();
        Callback::from(move |_| cb.emit(()))
    };
    // Solid + blurred once past the threshold, transparent at the top
    let bar_style = if props.scrolled {
        "background:rgba(0,0,0,0.9); backdrop-filter:blur(12px); -webkit-backdrop-filter:blur(12px); border-bottom:1px solid rgba(255,255,255,0.1); padding:12px 0;"
    } else {
        "background:transparent; border-bottom:1px solid transparent; padding:20px 0;"
    };
    html! {
        <nav id="top-bar" style={format!("position:fixed; top:0; left:0; right:0; z-index:50; transition:all 0.3s; {}", bar_style)}>
            <div style="max-width:1280px; margin:0 auto; padding:0 24px; display:flex; align-items:center; justify-content:space-between;">
                <div onclick={to_top} style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                    <span style="background:#2563eb; padding:6px; border-radius:8px; font-size:18px;">{"🚀"}</span>
                    <span style="font-size:20px; font-weight:700; letter-spacing:-0.02em;">{ props.org_name.clone() }</span>
                </div>
                <div class="desktop-only" style="align-items:center; gap:32px;">
                    { for props.nav.iter().map(|a| if a.primary {
                        html! { <ActionButton action={a.clone()} /> }
                    } else {
                        html! { <NavLink action={a.clone()} /> }
                    }) }
                </div>
                <button class="mobile-only" onclick={toggle_cb} aria-label="Toggle menu"
                    style="background:none; border:none; color:#d1d5db; font-size:24px; cursor:pointer;">
                    { if props.menu_open { "✕" } else { "☰" } }
                </button>
            </div>
            <MobileMenu show={props.menu_open} nav={props.nav.clone()} />
        </nav>
    }
}

#[derive(Properties, PartialEq, Clone)]
struct NavLinkProps {
    action: Action,
}

#[function_component(NavLink)]
fn nav_link(props: &NavLinkProps) -> Html {
    let onclick = use_follow(Some(props.action.target.clone()));
    html! {
        <button {onclick} style="background:none; border:none; color:#d1d5db; font-size:14px; font-weight:500; cursor:pointer;">
            { props.action.label.clone() }
        </button>
    }
}
