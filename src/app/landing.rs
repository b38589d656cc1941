//! Promotional page content and the invitation request form.

use crate::{app::state::Notice, ui::UI_TEXT};

#[derive(Debug, Clone, Copy)]
pub struct ServiceCard {
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub city: &'static str,
}

/// Section copy: a small uppercase kicker above the heading.
#[derive(Debug, Clone, Copy)]
pub struct SectionHeading {
    pub kicker: &'static str,
    pub title: &'static str,
}

pub struct LandingContent {
    pub hero_body: &'static str,
    pub philosophy: SectionHeading,
    pub philosophy_paragraphs: &'static [&'static str],
    pub services: SectionHeading,
    pub service_cards: &'static [ServiceCard],
    pub testimonial: Testimonial,
    pub cta: SectionHeading,
    pub cta_body: &'static str,
    pub footer: &'static str,
}

pub const LANDING: LandingContent = LandingContent {
    hero_body: "Эксклюзивный клуб для взыскательных инвесторов, открывающий доступ к уникальным возможностям в альтернативных активах.",
    philosophy: SectionHeading {
        kicker: "Наша философия",
        title: "Где видение встречает возможности",
    },
    philosophy_paragraphs: &[
        "В мире обычных инвестиций мы ищем исключительное. ЗолотойКапитал объединяет избранный круг дальновидных инвесторов, которые понимают, что истинное богатство строится через доступ к возможностям, недоступным массовому рынку.",
        "От музейного изобразительного искусства до винтажных автомобилей высшего класса, от редких коллекционных предметов до новых альтернативных активов — мы отбираем, проверяем и представляем только исключительное.",
    ],
    services: SectionHeading {
        kicker: "Наши направления",
        title: "Кураторское совершенство",
    },
    service_cards: &[
        ServiceCard {
            title: "Изобразительное искусство",
            body: "Доступ к работам музейного качества от признанных мастеров и современных визионеров, отобранных экспертами мирового уровня.",
        },
        ServiceCard {
            title: "Редкие коллекции",
            body: "От винтажных часов до исторических реликвий — каждый предмет с подтвержденной подлинностью и провенансом высочайшего стандарта.",
        },
        ServiceCard {
            title: "Классические автомобили",
            body: "Исключительные автомобили исторической значимости, каждый из которых представляет вершину автомобильного искусства и инженерии.",
        },
    ],
    testimonial: Testimonial {
        quote: "Членство в ЗолотойКапитал изменило мой подход к альтернативным инвестициям. Качество возможностей и уровень сервиса просто несравнимы.",
        author: "Уважаемый член клуба",
        city: "Москва",
    },
    cta: SectionHeading {
        kicker: "Начните свой путь",
        title: "Запросить приглашение",
    },
    cta_body: "Членство предоставляется только по приглашению. Оставьте заявку, и наш представитель свяжется с вами для обсуждения возможного сотрудничества.",
    footer: "Все права защищены. Членство только по приглашению.",
};

/// Invitation request form. Only the "submitted" state is kept; nothing is sent anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InviteForm {
    pub email: String,
    pub submitted: bool,
}

impl InviteForm {
    pub fn submit(&mut self, email: &str) -> Notice {
        let email = email.trim();
        if !looks_like_email(email) {
            return Notice::Failure(UI_TEXT.msg_invite_email_required.clone());
        }
        self.email = email.to_string();
        self.submitted = true;
        log::info!("Invitation requested");
        Notice::Success(format!("{}. {}", UI_TEXT.invite_thanks_title, UI_TEXT.invite_thanks_body))
    }
}

fn looks_like_email(email: &str) -> bool {
    email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty())
}
