use yew::prelude::*;

use crate::components::partners::PartnersCarousel;
use crate::contact::form::ContactForm;
use crate::visibility::counter::{Stat, StatsSection};
use crate::visibility::reveal::Reveal;

const SERVICES: &[(&str, &str)] = &[
    ("الاستشارات الإدارية", "نساعدك على بناء خطط عمل واضحة وقابلة للتنفيذ."),
    ("التسويق الرقمي", "حملات مدروسة تصل إلى عملائك في الوقت المناسب."),
    ("تطوير الأعمال", "حلول عملية لتوسيع نشاطك وزيادة عوائدك."),
];

const PARTNERS: &[(&str, &str)] = &[
    ("partner-1", "/assets/partners/partner-1.png"),
    ("partner-2", "/assets/partners/partner-2.png"),
    ("partner-3", "/assets/partners/partner-3.png"),
    ("partner-4", "/assets/partners/partner-4.png"),
    ("partner-5", "/assets/partners/partner-5.png"),
    ("partner-6", "/assets/partners/partner-6.png"),
];

fn stats() -> Vec<Stat> {
    vec![
        Stat { markup: "500+", data_target: Some("500"), label: "عميل سعيد" },
        Stat { markup: "120+", data_target: Some("120"), label: "مشروع منجز" },
        Stat { markup: "15", data_target: Some("15"), label: "سنوات خبرة" },
        Stat { markup: "24/7", data_target: None, label: "دعم متواصل" },
    ]
}

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <main class="home" dir="rtl">
            <section class="hero" id="home">
                <h1 data-aos="fade-up">{"شريكك في النمو"}</h1>
                <p data-aos="fade-up" data-aos-delay="100">
                    {"حلول متكاملة تساعد أعمالك على الانطلاق بثقة."}
                </p>
                <a href="#contact" class="btn btn-primary">{"تواصل معنا"}</a>
            </section>

            <StatsSection stats={stats()} />

            <section class="services" id="services">
                <h2>{"خدماتنا"}</h2>
                <div class="services-grid">
                    { for SERVICES.iter().map(|(title, body)| html! {
                        <Reveal class={classes!("service-card")}>
                            <h3>{*title}</h3>
                            <p>{*body}</p>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section class="partners" id="partners">
                <h2>{"شركاؤنا"}</h2>
                <PartnersCarousel logos={PARTNERS.to_vec()} />
            </section>

            <section class="contact" id="contact">
                <h2>{"تواصل معنا"}</h2>
                <Reveal class={classes!("info-card")}>
                    <p>{"يسعدنا تلقي استفساراتك، وسنرد عليك في أقرب وقت."}</p>
                </Reveal>
                <ContactForm />
            </section>
        </main>
    }
}
