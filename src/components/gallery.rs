use crate::content::MapCard;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GallerySectionProps {
    pub id: String,
    pub heading: String,
    pub maps: Vec<MapCard>,
}

#[function_component(GallerySection)]
pub fn gallery_section(props: &GallerySectionProps) -> Html {
    let card_style = "background:rgba(255,255,255,0.05); border:1px solid rgba(255,255,255,0.1); border-radius:16px; padding:24px;";
    html! {
        <section id={props.id.clone()} style="padding:96px 24px;">
            <div style="max-width:1280px; margin:0 auto;">
                <h2 style="font-size:36px; font-weight:700; margin:0 0 48px 0; text-align:center;">{ props.heading.clone() }</h2>
                <div style="display:grid; grid-template-columns:repeat(auto-fill, minmax(260px, 1fr)); gap:32px;">
                    { for props.maps.iter().map(|m| html! {
                        <div style={card_style}>
                            <div style="background:#2563eb; width:40px; height:40px; border-radius:8px; display:flex; align-items:center; justify-content:center; margin-bottom:16px;">{"🗺"}</div>
                            <h3 style="font-size:20px; font-weight:700; margin:0 0 8px 0;">{ m.title.clone() }</h3>
                            <p style="color:#6b7280; font-size:14px; margin:0 0 16px 0;">{ m.kind.clone() }</p>
                            <span style="font-size:12px; font-weight:700; text-transform:uppercase; letter-spacing:0.05em; color:#60a5fa; background:rgba(96,165,250,0.1); padding:4px 8px; border-radius:4px;">{ m.status.clone() }</span>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
