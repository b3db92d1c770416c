use super::{footer::Footer, nav_context::NavContext, navbar::Navbar, section_view::SectionView};
use crate::content::{SiteContent, Target};
use crate::controller;
use crate::host::BrowserHost;
use crate::listener::Subscription;
use crate::model::PageState;
use crate::util::clog;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

// Variant picked by `<body data-variant="...">`; the page reads no URL parameters
fn requested_variant() -> Option<String> {
    web_sys::window()?
        .document()?
        .body()?
        .get_attribute("data-variant")
}

fn load_error() -> Html {
    html! {
        <div style="min-height:100vh; display:flex; align-items:center; justify-content:center; color:#f85149;">
            { "This page could not be loaded." }
        </div>
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let site = use_memo((), |_| SiteContent::load());
    let requested = use_memo((), |_| requested_variant());
    let page = use_reducer(PageState::default);

    // Scroll listener lives exactly as long as the view
    {
        let dispatcher = page.dispatcher();
        use_effect_with((), move |_| {
            let scroll_cb = Closure::wrap(Box::new(move |_e: web_sys::Event| {
                dispatcher.dispatch(controller::on_scroll(&BrowserHost));
            }) as Box<dyn FnMut(_)>);
            let subscription = web_sys::window().map(|w| Subscription::new(w, "scroll", scroll_cb));
            // Cleanup
            move || drop(subscription)
        });
    }

    // Dispatchers are stable, so these callbacks (and NavContext) are built once
    let navigate = {
        let dispatcher = page.dispatcher();
        use_callback((), move |target: Target, _| {
            controller::navigate(&BrowserHost, &target, |action| dispatcher.dispatch(action));
        })
    };
    let toggle_menu = {
        let dispatcher = page.dispatcher();
        use_callback((), move |_: (), _| dispatcher.dispatch(controller::toggle_menu()))
    };

    // Title tracks the selected variant
    {
        let title = match &*site {
            Ok(site) => site
                .variant((*requested).as_deref())
                .map(|v| format!("{} · {}", site.org_name, v.tagline)),
            Err(_) => None,
        };
        use_effect_with(title, |title| {
            if let (Some(title), Some(doc)) = (title, web_sys::window().and_then(|w| w.document())) {
                doc.set_title(title);
            }
            || ()
        });
    }

    let site = match &*site {
        Ok(site) => site,
        Err(e) => {
            clog(&format!("content error: {}", e));
            return load_error();
        }
    };
    let Some(variant) = site.variant((*requested).as_deref()) else {
        clog("content has no page variants");
        return load_error();
    };

    html! {
        <ContextProvider<NavContext> context={NavContext { navigate }}>
            <div style="min-height:100vh; background:#020617; color:#fff;">
                <Navbar
                    org_name={site.org_name.clone()}
                    nav={variant.nav.clone()}
                    scrolled={page.scrolled}
                    menu_open={page.menu_open}
                    on_toggle_menu={toggle_menu}
                />
                { for variant.sections.iter().map(|s| html! { <SectionView section={s.clone()} /> }) }
                <Footer
                    org_name={site.org_name.clone()}
                    founder={site.founder.clone()}
                    social={variant.social.clone()}
                />
            </div>
        </ContextProvider<NavContext>>
    }
}
