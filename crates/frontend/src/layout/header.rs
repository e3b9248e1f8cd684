use crate::content::SiteContent;
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use crate::shared::scroll::scroll_to_section;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Scroll offset past which the header switches to its solid style.
const SCROLL_THRESHOLD: f64 = 50.0;

#[component]
fn NavLink(
    /// id of the target section, without the leading '#'
    target: &'static str,
    label: &'static str,
    /// Called after navigating (used to close the mobile menu)
    #[prop(optional)]
    on_navigate: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <a
            href=format!("#{}", target)
            class="nav__link"
            on:click=move |ev| {
                ev.prevent_default();
                scroll_to_section(target);
                if let Some(cb) = on_navigate {
                    cb.run(());
                }
            }
        >
            {label}
        </a>
    }
}

const NAV_ITEMS: [(&str, &str); 4] = [
    ("home", "Home"),
    ("menu", "Menu"),
    ("about", "About"),
    ("contact", "Contact"),
];

#[component]
pub fn Header() -> impl IntoView {
    let content = expect_context::<&'static SiteContent>();
    let scrolled = RwSignal::new(false);
    let menu_open = RwSignal::new(false);

    // Page-lifetime scroll listener; the closure is leaked on purpose.
    Effect::new(move |_| {
        let Some(window) = web_sys::window() else {
            return;
        };
        let on_scroll = Closure::<dyn FnMut()>::new(move || {
            let y = web_sys::window()
                .and_then(|w| w.scroll_y().ok())
                .unwrap_or(0.0);
            scrolled.set(y > SCROLL_THRESHOLD);
        });
        let _ = window
            .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
        on_scroll.forget();
    });

    let close_menu = Callback::new(move |_: ()| menu_open.set(false));

    view! {
        <header class=move || {
            if scrolled.get() {
                "header header--scrolled"
            } else {
                "header"
            }
        }>
            <div class="header__inner">
                <div class="header__brand">
                    {icon("utensils")}
                    <span class="header__brand-name">{content.brand.clone()}</span>
                </div>

                <nav class="header__nav">
                    {NAV_ITEMS
                        .iter()
                        .map(|(target, label)| view! { <NavLink target=*target label=*label /> })
                        .collect_view()}
                </nav>

                <div class="header__actions">
                    <Button on_click=Callback::new(move |_| scroll_to_section("contact"))>
                        "Reserve Table"
                    </Button>
                </div>

                <button
                    class="header__menu-toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { icon("x") } else { icon("menu") }}
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <nav class="header__mobile-nav">
                    {NAV_ITEMS
                        .iter()
                        .map(|(target, label)| {
                            view! { <NavLink target=*target label=*label on_navigate=close_menu /> }
                        })
                        .collect_view()}
                    <Button
                        class="header__mobile-reserve"
                        on_click=Callback::new(move |_| {
                            menu_open.set(false);
                            scroll_to_section("contact");
                        })
                    >
                        "Reserve Table"
                    </Button>
                </nav>
            </Show>
        </header>
    }
}
