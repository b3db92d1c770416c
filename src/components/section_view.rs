use super::{
    data_section::DataSection, founder::FounderSection, gallery::GallerySection,
    hero::HeroSection, mission::MissionSection,
};
use crate::content::Section;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SectionViewProps {
    pub section: Section,
}

#[function_component(SectionView)]
pub fn section_view(props: &SectionViewProps) -> Html {
    match props.section.clone() {
        Section::Hero { badge, title_lead, title_highlight, blurb, actions } => html! {
            <HeroSection {badge} {title_lead} {title_highlight} {blurb} {actions} />
        },
        Section::Mission { id, heading, body, points } => html! {
            <MissionSection {id} {heading} {body} {points} />
        },
        Section::Gallery { id, heading, maps } => html! {
            <GallerySection {id} {heading} {maps} />
        },
        Section::Data { id, heading, body, action } => html! {
            <DataSection {id} {heading} {body} {action} />
        },
        Section::Founder { id, heading, name, role, bio, links } => html! {
            <FounderSection {id} {heading} {name} {role} {bio} {links} />
        },
    }
}
