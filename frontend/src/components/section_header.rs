use yew::prelude::*;

use crate::components::reveal::{reveal_classes, use_reveal};

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub centered: bool,
}

#[function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> Html {
    let (node, visible) = use_reveal();

    html! {
        <div ref={node} class={classes!(reveal_classes("section-header", visible), props.centered.then_some("centered"))}>
            <h2>{ &*props.title }</h2>
            if let Some(subtitle) = &props.subtitle {
                <p class="section-subtitle">{ &**subtitle }</p>
            }
            <div class="section-rule"></div>
        </div>
    }
}
