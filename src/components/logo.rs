use yew::prelude::*;

use crate::i18n::locale::use_locale;

#[derive(Properties, PartialEq)]
pub struct LogoProps {
    #[prop_or_default]
    pub dark: bool,
    #[prop_or_default]
    pub large: bool,
}

#[function_component(Logo)]
pub fn logo(props: &LogoProps) -> Html {
    let locale = use_locale();

    html! {
        <div class={classes!("logo", props.dark.then(|| "logo-dark"), props.large.then(|| "logo-large"))}>
            <div class="logo-mark">
                <img src="/assets/logo.jpg" alt={locale.text("common.logoAlt")} />
            </div>
            <div class="logo-words">
                <span class="logo-green">{locale.text("common.green")}</span>
                <span class="logo-lane">{locale.text("common.lane")}</span>
            </div>
        </div>
    }
}
