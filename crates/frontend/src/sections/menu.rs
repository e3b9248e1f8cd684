use crate::content::SiteContent;
use crate::shared::tabs::{TabList, TabPanel, TabTrigger, Tabs, TabsContext};
use leptos::prelude::*;

/// Category shown before the visitor picks one.
pub const DEFAULT_CATEGORY: &str = "appetizers";

#[component]
pub fn MenuSection() -> impl IntoView {
    let content = expect_context::<&'static SiteContent>();

    let tabs = TabsContext::new(DEFAULT_CATEGORY);
    tabs.init_query_sync(
        "category",
        content.menu.iter().map(|c| c.key.clone()).collect(),
    );

    view! {
        <section id="menu" class="menu">
            <div class="section__intro">
                <h2 class="section__title">"Our Menu"</h2>
                <p class="section__subtitle">
                    "Discover our carefully crafted dishes featuring the finest ingredients and bold flavors"
                </p>
            </div>

            <Tabs tabs=tabs class="menu__tabs">
                <TabList>
                    {content
                        .menu
                        .iter()
                        .map(|category| {
                            view! {
                                <TabTrigger key=category.key.clone()>
                                    {category.title.clone()}
                                </TabTrigger>
                            }
                        })
                        .collect_view()}
                </TabList>

                {content
                    .menu
                    .iter()
                    .map(|category| {
                        let items = category.items.clone();
                        view! {
                            <TabPanel key=category.key.clone()>
                                <div class="menu__grid">
                                    {items
                                        .iter()
                                        .map(|item| {
                                            view! {
                                                <article class="menu__item">
                                                    <div class="menu__item-body">
                                                        <h3 class="menu__item-name">{item.name.clone()}</h3>
                                                        <p class="menu__item-description">
                                                            {item.description.clone()}
                                                        </p>
                                                    </div>
                                                    <span class="menu__item-price">{item.price.clone()}</span>
                                                </article>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </TabPanel>
                        }
                    })
                    .collect_view()}
            </Tabs>
        </section>
    }
}
