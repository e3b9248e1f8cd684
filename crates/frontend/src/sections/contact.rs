use crate::content::SiteContent;
use crate::shared::components::ui::{
    Button, Card, CardContent, CardDescription, CardHeader, CardTitle, Input, Select, Textarea,
};
use crate::shared::icons::icon;
use contracts::reservation::ReservationRequest;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long the "Reservation Received!" confirmation stays on the button.
const CONFIRMATION_MS: u32 = 4000;

#[component]
fn ReservationForm() -> impl IntoView {
    let content = expect_context::<&'static SiteContent>();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let guests = RwSignal::new(String::new());
    let date = RwSignal::new(String::new());
    let time = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());

    let submitted = RwSignal::new(false);

    let guest_options = content.guest_options.clone();
    let time_options: Vec<(String, String)> = content
        .reservation_times
        .iter()
        .map(|t| (t.clone(), t.clone()))
        .collect();

    // Client-side only: the payload is logged, never sent anywhere.
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let request = ReservationRequest {
            name: name.get_untracked(),
            email: email.get_untracked(),
            phone: phone.get_untracked(),
            guests: guests.get_untracked(),
            date: date.get_untracked(),
            time: time.get_untracked(),
            message: message.get_untracked(),
        };

        if !request.is_complete() {
            log::warn!(
                "reservation form incomplete, missing: {:?}",
                request.missing_fields()
            );
            return;
        }

        match serde_json::to_string(&request) {
            Ok(payload) => log::info!("Reservation submitted: {}", payload),
            Err(e) => log::error!("could not serialize reservation: {}", e),
        }

        submitted.set(true);
        spawn_local(async move {
            TimeoutFuture::new(CONFIRMATION_MS).await;
            submitted.set(false);
        });
    };

    view! {
        <Card class="contact__form-card">
            <CardHeader>
                <CardTitle>"Make a Reservation"</CardTitle>
                <CardDescription>
                    "Book your table for an unforgettable dining experience"
                </CardDescription>
            </CardHeader>
            <CardContent>
                <form class="reservation-form" on:submit=on_submit>
                    <div class="reservation-form__row">
                        <Input
                            label="Name"
                            value=name
                            on_input=Callback::new(move |v| name.set(v))
                            placeholder="Your full name"
                            required=true
                        />
                        <Input
                            label="Email"
                            input_type="email"
                            value=email
                            on_input=Callback::new(move |v| email.set(v))
                            placeholder="your@email.com"
                            required=true
                        />
                    </div>

                    <div class="reservation-form__row">
                        <Input
                            label="Phone"
                            input_type="tel"
                            value=phone
                            on_input=Callback::new(move |v| phone.set(v))
                            placeholder="(555) 123-4567"
                            required=true
                        />
                        <Select
                            label="Guests"
                            value=guests
                            on_change=Callback::new(move |v| guests.set(v))
                            options=guest_options
                            placeholder="Select guests"
                            required=true
                        />
                    </div>

                    <div class="reservation-form__row">
                        <Input
                            label="Date"
                            input_type="date"
                            value=date
                            on_input=Callback::new(move |v| date.set(v))
                            required=true
                        />
                        <Select
                            label="Time"
                            value=time
                            on_change=Callback::new(move |v| time.set(v))
                            options=time_options
                            placeholder="Select time"
                            required=true
                        />
                    </div>

                    <Textarea
                        label="Special Requests"
                        value=message
                        on_input=Callback::new(move |v| message.set(v))
                        placeholder="Any special requests or dietary restrictions?"
                        rows=3
                    />

                    <Button button_type="submit" class="reservation-form__submit">
                        {move || {
                            if submitted.get() {
                                "Reservation Received!"
                            } else {
                                "Make Reservation"
                            }
                        }}
                    </Button>
                </form>
            </CardContent>
        </Card>
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let content = expect_context::<&'static SiteContent>();

    view! {
        <section id="contact" class="contact">
            <div class="section__intro">
                <h2 class="section__title">"Contact & Reservations"</h2>
                <p class="section__subtitle">
                    "Ready to dine with us? Make a reservation or get in touch"
                </p>
            </div>

            <div class="contact__grid">
                <ReservationForm />

                <div class="contact__info">
                    <Card>
                        <CardHeader>
                            <CardTitle>{icon("phone")} "Contact Information"</CardTitle>
                        </CardHeader>
                        <CardContent>
                            <div class="contact__row">
                                {icon("phone")}
                                <span>{content.contact.phone.clone()}</span>
                            </div>
                            <div class="contact__row">
                                {icon("mail")}
                                <span>{content.contact.email.clone()}</span>
                            </div>
                            <div class="contact__row">
                                {icon("map-pin")}
                                <span>{content.contact.address.clone()}</span>
                            </div>
                        </CardContent>
                    </Card>

                    <Card>
                        <CardHeader>
                            <CardTitle>{icon("clock")} "Hours of Operation"</CardTitle>
                        </CardHeader>
                        <CardContent>
                            {content
                                .hours
                                .iter()
                                .map(|entry| {
                                    view! {
                                        <div class="contact__hours-row">
                                            <span>{entry.days.clone()}</span>
                                            <span>{entry.hours.clone()}</span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </CardContent>
                    </Card>

                    <Card>
                        <CardHeader>
                            <CardTitle>"Location"</CardTitle>
                        </CardHeader>
                        <CardContent>
                            <div class="contact__map-placeholder">
                                {icon("map-pin")}
                                <p>"Interactive Map"</p>
                                <p class="contact__map-address">{content.contact.address.clone()}</p>
                            </div>
                        </CardContent>
                    </Card>
                </div>
            </div>
        </section>
    }
}
