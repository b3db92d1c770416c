use super::action_button::ActionButton;
use crate::content::Action;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct FounderSectionProps {
    pub id: String,
    pub heading: String,
    pub name: String,
    pub role: String,
    pub bio: String,
    pub links: Vec<Action>,
}

#[function_component(FounderSection)]
pub fn founder_section(props: &FounderSectionProps) -> Html {
    let initials: String = props
        .name
        .split_whitespace()
        .filter_map(|w| w.chars().next())
        .collect();
    html! {
        <section id={props.id.clone()} style="padding:96px 24px;">
            <div style="max-width:896px; margin:0 auto; display:flex; flex-wrap:wrap; gap:48px; align-items:center; justify-content:center;">
                <div style="width:160px; height:160px; border-radius:999px; background:linear-gradient(135deg, #2563eb, #9333ea); display:flex; align-items:center; justify-content:center; font-size:48px; font-weight:900;">
                    { initials }
                </div>
                <div style="flex:1; min-width:280px;">
                    <h2 style="font-size:36px; font-weight:700; margin:0 0 8px 0;">{ props.heading.clone() }</h2>
                    <div style="font-size:20px; font-weight:600;">{ props.name.clone() }</div>
                    <div style="color:#60a5fa; font-size:14px; margin-bottom:16px;">{ props.role.clone() }</div>
                    <p style="color:#9ca3af; line-height:1.7; margin:0 0 24px 0;">{ props.bio.clone() }</p>
                    <div style="display:flex; flex-wrap:wrap; gap:12px;">
                        { for props.links.iter().map(|a| html! { <ActionButton action={a.clone()} /> }) }
                    </div>
                </div>
            </div>
        </section>
    }
}
