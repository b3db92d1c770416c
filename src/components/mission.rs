use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct MissionSectionProps {
    pub id: String,
    pub heading: String,
    pub body: String,
    pub points: Vec<String>,
}

#[function_component(MissionSection)]
pub fn mission_section(props: &MissionSectionProps) -> Html {
    html! {
        <section id={props.id.clone()} style="padding:96px 24px; background:rgba(0,0,0,0.2);">
            <div style="max-width:1280px; margin:0 auto; display:grid; grid-template-columns:repeat(auto-fit, minmax(300px, 1fr)); gap:64px; align-items:center;">
                <div>
                    <h2 style="font-size:36px; font-weight:700; margin:0 0 24px 0;">{ props.heading.clone() }</h2>
                    <p style="color:#9ca3af; line-height:1.7; margin:0 0 24px 0;">{ props.body.clone() }</p>
                    <div style="display:flex; flex-direction:column; gap:16px;">
                        { for props.points.iter().map(|p| html! {
                            <div style="display:flex; align-items:center; gap:12px;">
                                <span style="background:rgba(37,99,235,0.2); padding:4px 6px; border-radius:999px; color:#3b82f6;">{"★"}</span>
                                <span style="font-size:14px; font-weight:500;">{ p.clone() }</span>
                            </div>
                        }) }
                    </div>
                </div>
                <div style="background:linear-gradient(135deg, rgba(37,99,235,0.2), rgba(147,51,234,0.2)); border:1px solid rgba(255,255,255,0.1); border-radius:24px; aspect-ratio:1/1; display:flex; align-items:center; justify-content:center; font-size:128px;">
                    {"🌍"}
                </div>
            </div>
        </section>
    }
}
