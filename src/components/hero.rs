use super::action_button::ActionButton;
use crate::content::Action;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct HeroSectionProps {
    pub badge: String,
    pub title_lead: String,
    pub title_highlight: String,
    pub blurb: String,
    pub actions: Vec<Action>,
}

#[function_component(HeroSection)]
pub fn hero_section(props: &HeroSectionProps) -> Html {
    html! {
        <section style="position:relative; padding:160px 24px 96px 24px;">
            <div style="max-width:1280px; margin:0 auto; text-align:center;">
                <div style="display:inline-flex; align-items:center; gap:8px; background:rgba(59,130,246,0.1); border:1px solid rgba(59,130,246,0.2); padding:4px 16px; border-radius:999px; color:#60a5fa; font-size:12px; font-weight:700; text-transform:uppercase; letter-spacing:0.1em; margin-bottom:32px;">
                    <span>{"★"}</span>
                    <span>{ props.badge.clone() }</span>
                </div>
                <h1 style="font-size:clamp(40px, 7vw, 72px); font-weight:900; letter-spacing:-0.02em; margin:0 0 32px 0;">
                    { props.title_lead.clone() }<br />
                    <span style="color:#3b82f6;">{ props.title_highlight.clone() }</span>
                </h1>
                <p style="max-width:672px; margin:0 auto 48px auto; font-size:18px; color:#9ca3af;">{ props.blurb.clone() }</p>
                <div style="display:flex; flex-wrap:wrap; align-items:center; justify-content:center; gap:16px;">
                    { for props.actions.iter().map(|a| html! { <ActionButton action={a.clone()} /> }) }
                </div>
            </div>
        </section>
    }
}
