use crate::content::SiteContent;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn AboutSection() -> impl IntoView {
    let content = expect_context::<&'static SiteContent>();
    let story = &content.story;

    view! {
        <section id="about" class="about">
            <div class="about__grid">
                <div class="about__text">
                    <h2 class="section__title section__title--light">{story.heading.clone()}</h2>
                    {story
                        .paragraphs
                        .iter()
                        .map(|p| view! { <p class="about__paragraph">{p.clone()}</p> })
                        .collect_view()}
                    <div class="about__stats">
                        {story
                            .stats
                            .iter()
                            .map(|stat| {
                                view! {
                                    <div class="about__stat">
                                        <div class="about__stat-value">{stat.value.clone()}</div>
                                        <div class="about__stat-label">{stat.label.clone()}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="about__aside">
                    <div class="about__photo"></div>
                    <div class="about__rating">
                        <div class="about__rating-stars">
                            {(0..5).map(|_| icon("star")).collect_view()}
                        </div>
                        <div class="about__rating-caption">{story.rating_caption.clone()}</div>
                    </div>
                </div>
            </div>
        </section>
    }
}
