use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LogoProps {
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Logo)]
pub fn logo(props: &LogoProps) -> Html {
    html! {
        <div class={classes!("brand-logo", props.class.clone())}>
            {"GROW"}<span class="accent">{"NEXT"}</span>{"GEN"}
        </div>
    }
}
