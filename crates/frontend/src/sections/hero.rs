use crate::content::SiteContent;
use crate::shared::components::ui::Button;
use crate::shared::scroll::scroll_to_section;
use leptos::prelude::*;

#[component]
pub fn HeroSection() -> impl IntoView {
    let content = expect_context::<&'static SiteContent>();

    view! {
        <section id="home" class="hero">
            <div class="hero__backdrop"></div>
            <div class="hero__content">
                <div class="hero__panel">
                    <h1 class="hero__title">
                        "Welcome to "
                        <span class="hero__title-accent">{content.brand.clone()}</span>
                    </h1>
                    <p class="hero__tagline">{content.tagline.clone()}</p>
                </div>
                <div class="hero__actions">
                    <Button size="lg" on_click=Callback::new(move |_| scroll_to_section("menu"))>
                        "View Menu"
                    </Button>
                    <Button
                        variant="outline"
                        size="lg"
                        on_click=Callback::new(move |_| scroll_to_section("contact"))
                    >
                        "Make Reservation"
                    </Button>
                </div>
            </div>
        </section>
    }
}
