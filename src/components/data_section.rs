use super::action_button::ActionButton;
use crate::content::Action;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct DataSectionProps {
    pub id: String,
    pub heading: String,
    pub body: String,
    pub action: Action,
}

#[function_component(DataSection)]
pub fn data_section(props: &DataSectionProps) -> Html {
    html! {
        <section id={props.id.clone()} style="padding:96px 24px; background:#2563eb;">
            <div style="max-width:896px; margin:0 auto; text-align:center;">
                <div style="font-size:64px; margin-bottom:32px;">{"🗄"}</div>
                <h2 style="font-size:36px; font-weight:700; margin:0 0 24px 0;">{ props.heading.clone() }</h2>
                <p style="color:#dbeafe; font-size:20px; margin:0 0 40px 0;">{ props.body.clone() }</p>
                <ActionButton action={props.action.clone()} />
            </div>
        </section>
    }
}
