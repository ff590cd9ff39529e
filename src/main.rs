use log::{info, Level};
use yew::prelude::*;

mod config;
mod dom;
mod lead;
mod selection;
mod services;
mod i18n {
    pub mod language;
    pub mod storage;
    pub mod resolver;
    pub mod locale;
}
mod components {
    pub mod logo;
    pub mod header;
    pub mod hero;
    pub mod services;
    pub mod service_modal;
    pub mod lead_form;
    pub mod footer;
}

use components::{
    footer::Footer,
    header::Header,
    hero::Hero,
    lead_form::LeadForm,
    service_modal::ServiceModal,
    services::Services,
};
use dom::Section;
use i18n::locale::LocaleProvider;
use selection::{Selection, SelectionAction};
use services::Service;

#[function_component(App)]
fn app() -> Html {
    let selection = use_reducer(Selection::default);

    let on_select = {
        let selection = selection.clone();
        Callback::from(move |service: Service| selection.dispatch(SelectionAction::OpenService(service)))
    };

    let on_close = {
        let selection = selection.clone();
        Callback::from(move |_: ()| selection.dispatch(SelectionAction::CloseOverlay))
    };

    let on_get_quote = {
        let selection = selection.clone();
        Callback::from(move |service: Service| {
            selection.dispatch(SelectionAction::RequestQuote(service));
            let selection = selection.clone();
            // The overlay has to unmount before the form is measured.
            dom::scroll_to_section_later(Section::Quote, config::QUOTE_SCROLL_DELAY_MS, move || {
                selection.dispatch(SelectionAction::QuoteShown)
            });
        })
    };

    let on_submitted = {
        let selection = selection.clone();
        Callback::from(move |_: ()| selection.dispatch(SelectionAction::ClearSelection))
    };

    html! {
        <div class="app">
            <Header />
            <main>
                <Hero />
                <Services {on_select} />
                <LeadForm
                    selected_service={selection.selected_service}
                    quote_pending={selection.quote_pending()}
                    {on_submitted}
                />
            </main>
            <Footer />
            <ServiceModal service={selection.open_service()} {on_close} {on_get_quote} />
        </div>
    }
}

#[function_component(Root)]
fn root() -> Html {
    html! {
        <LocaleProvider>
            <App />
        </LocaleProvider>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<Root>::new().render();
}
