use super::nav_context::use_follow;
use crate::content::{SocialLink, Target};
use crate::util::{copyright_line, current_year};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct FooterProps {
    pub org_name: String,
    pub founder: String,
    pub social: Vec<SocialLink>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = use_memo((), |_| current_year());
    html! {
        <footer style="padding:80px 24px; border-top:1px solid rgba(255,255,255,0.05);">
            <div style="max-width:1280px; margin:0 auto; display:flex; flex-wrap:wrap; justify-content:space-between; align-items:center; gap:32px;">
                <div style="display:flex; align-items:center; gap:8px;">
                    <span style="font-size:24px;">{"🚀"}</span>
                    <span style="font-size:24px; font-weight:700;">{ props.org_name.clone() }</span>
                </div>
                <p style="color:#6b7280; font-size:14px; margin:0;">
                    { copyright_line(*year, &props.founder, &props.org_name) }
                </p>
                <div style="display:flex; gap:24px;">
                    { for props.social.iter().map(|s| html! { <SocialButton link={s.clone()} /> }) }
                </div>
            </div>
        </footer>
    }
}

#[derive(Properties, PartialEq, Clone)]
struct SocialButtonProps {
    link: SocialLink,
}

#[function_component(SocialButton)]
fn social_button(props: &SocialButtonProps) -> Html {
    // No URL: render the button but do nothing on click
    let onclick = use_follow(props.link.url.clone().map(Target::External));
    html! {
        <button {onclick} title={props.link.label.clone()} aria-label={props.link.label.clone()}
            style="background:none; border:none; color:#9ca3af; font-size:20px; cursor:pointer;">
            { props.link.icon.glyph() }
        </button>
    }
}
