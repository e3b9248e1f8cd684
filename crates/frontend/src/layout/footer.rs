use crate::content::SiteContent;
use crate::shared::icons::icon;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy, Debug, PartialEq)]
enum ServerStatus {
    Online,
    Offline,
    Checking,
}

impl ServerStatus {
    fn display_text(&self) -> &'static str {
        match self {
            ServerStatus::Online => "Server: Online",
            ServerStatus::Offline => "Server: Offline",
            ServerStatus::Checking => "Server: Checking...",
        }
    }

    fn css_class(&self) -> &'static str {
        match self {
            ServerStatus::Online => "status-online",
            ServerStatus::Offline => "status-offline",
            ServerStatus::Checking => "status-checking",
        }
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let content = expect_context::<&'static SiteContent>();
    let status = RwSignal::new(ServerStatus::Checking);

    let check_server = move || {
        status.set(ServerStatus::Checking);

        spawn_local(async move {
            let result = ping_server().await;
            status.set(if result {
                ServerStatus::Online
            } else {
                ServerStatus::Offline
            });
        });
    };

    // Check once on mount
    Effect::new(move |_| {
        check_server();
    });

    view! {
        <footer class="footer">
            <div class="footer__inner">
                <div class="footer__columns">
                    <div class="footer__column">
                        <div class="footer__brand">
                            {icon("utensils")}
                            <span class="footer__brand-name">{content.brand.clone()}</span>
                        </div>
                        <p class="footer__blurb">{content.footer_blurb.clone()}</p>
                    </div>

                    <div class="footer__column">
                        <h3 class="footer__heading">"Quick Links"</h3>
                        <ul class="footer__links">
                            <li><a href="#home" class="footer__link">"Home"</a></li>
                            <li><a href="#menu" class="footer__link">"Menu"</a></li>
                            <li><a href="#about" class="footer__link">"About"</a></li>
                            <li><a href="#contact" class="footer__link">"Contact"</a></li>
                        </ul>
                    </div>

                    <div class="footer__column">
                        <h3 class="footer__heading">"Contact"</h3>
                        <ul class="footer__contact">
                            <li>{content.contact.phone.clone()}</li>
                            <li>{content.contact.email.clone()}</li>
                            <li>{content.contact.address.clone()}</li>
                        </ul>
                    </div>

                    <div class="footer__column">
                        <h3 class="footer__heading">"Follow Us"</h3>
                        <div class="footer__socials">
                            {content
                                .socials
                                .iter()
                                .map(|social| {
                                    view! {
                                        <a href=social.url.clone() class="footer__link">
                                            {social.label.clone()}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>

                <div class="footer__bottom">
                    <p>"© 2024 Harbor Grill. All rights reserved."</p>
                    <span class=move || status.get().css_class()>
                        {move || status.get().display_text()}
                    </span>
                </div>
            </div>
        </footer>
    }
}

async fn ping_server() -> bool {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return false,
    };

    let request = match web_sys::Request::new_with_str("/health") {
        Ok(r) => r,
        Err(_) => return false,
    };

    let _ = request.headers().set("Accept", "application/json");

    let promise = window.fetch_with_request(&request);
    let response = match wasm_bindgen_futures::JsFuture::from(promise).await {
        Ok(r) => r,
        Err(_) => return false,
    };

    let response: web_sys::Response = match response.dyn_into() {
        Ok(r) => r,
        Err(_) => return false,
    };

    response.ok()
}
