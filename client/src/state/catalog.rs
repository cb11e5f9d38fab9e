//! Static catalog: gift-card denominations, instruction steps, FAQ and
//! navigation tables.
//!
//! DESIGN
//! ======
//! Every table is a `const` slice fixed at build time. Order is meaningful:
//! the page renders entries left-to-right, top-to-bottom in slice order.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

/// Section id of the card grid. Target of both call-to-action buttons.
pub const CARDS_SECTION: &str = "cards";
/// Section id of the "how to use" walkthrough.
pub const HOWTO_SECTION: &str = "howto";
/// Section id of the FAQ.
pub const FAQ_SECTION: &str = "faq";

/// A purchasable gift-card denomination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GiftCard {
    pub id: u32,
    /// Face value in rubles.
    pub amount: u32,
    pub image: &'static str,
    pub description: &'static str,
}

/// One step of the usage walkthrough.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InstructionStep {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: IconName,
}

/// Symbolic icon names used across the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconName {
    Apple,
    Menu,
    CreditCard,
    Wallet,
    Mail,
    Gift,
}

impl IconName {
    /// Symbolic name, emitted as `data-icon` on the rendered SVG.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Apple => "Apple",
            Self::Menu => "Menu",
            Self::CreditCard => "CreditCard",
            Self::Wallet => "Wallet",
            Self::Mail => "Mail",
            Self::Gift => "Gift",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

/// Header navigation entry pointing at an in-page section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

impl NavLink {
    pub fn href(self) -> String {
        format!("#{}", self.anchor)
    }
}

/// Footer column. Links have no destination yet and render as `#`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FooterLinkGroup {
    pub heading: &'static str,
    pub links: &'static [&'static str],
}

pub const GIFT_CARDS: &[GiftCard] = &[
    GiftCard {
        id: 1,
        amount: 1000,
        image: "https://images.unsplash.com/photo-1592512399470-65ba36d1df92?ixlib=rb-4.0.3&auto=format&fit=crop&w=1600&q=80",
        description: "Идеально для небольших покупок в App Store или iTunes",
    },
    GiftCard {
        id: 2,
        amount: 2500,
        image: "https://images.unsplash.com/photo-1584553279313-7ba74b330356?ixlib=rb-4.0.3&auto=format&fit=crop&w=1600&q=80",
        description: "Отличный выбор для приложений, игр и подписок",
    },
    GiftCard {
        id: 3,
        amount: 5000,
        image: "https://images.unsplash.com/photo-1556656793-08538906a9f8?ixlib=rb-4.0.3&auto=format&fit=crop&w=1600&q=80",
        description: "Премиальная карта для всех цифровых продуктов Apple",
    },
];

pub const INSTRUCTION_STEPS: &[InstructionStep] = &[
    InstructionStep {
        title: "Выберите номинал",
        description: "Выберите подходящий номинал Apple Gift Card из доступных вариантов.",
        icon: IconName::CreditCard,
    },
    InstructionStep {
        title: "Оплатите заказ",
        description: "Выполните безопасную оплату с использованием предпочитаемого метода.",
        icon: IconName::Wallet,
    },
    InstructionStep {
        title: "Получите код",
        description: "Мгновенно получите код активации на ваш e-mail.",
        icon: IconName::Mail,
    },
    InstructionStep {
        title: "Активируйте карту",
        description: "Войдите в свой Apple ID и активируйте подарочную карту в App Store.",
        icon: IconName::Gift,
    },
];

pub const FAQ_ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        question: "Как долго действует карта?",
        answer: "Apple Gift Cards не имеют срока действия и могут быть использованы в любое время.",
    },
    FaqEntry {
        question: "Где можно использовать Apple Gift Card?",
        answer: "В App Store, iTunes Store, для покупки Apple Music, Apple TV+, Apple Arcade, iCloud и других сервисов Apple.",
    },
    FaqEntry {
        question: "Как быстро я получу код активации?",
        answer: "Код активации отправляется на ваш email сразу после подтверждения оплаты.",
    },
];

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Карты", anchor: CARDS_SECTION },
    NavLink { label: "Как использовать", anchor: HOWTO_SECTION },
    NavLink { label: "FAQ", anchor: FAQ_SECTION },
];

pub const FOOTER_LINK_GROUPS: &[FooterLinkGroup] = &[
    FooterLinkGroup { heading: "Продукты", links: &["Apple Gift Cards", "App Store", "iTunes"] },
    FooterLinkGroup { heading: "Поддержка", links: &["FAQ", "Поддержка", "Контакты"] },
    FooterLinkGroup {
        heading: "Правовая информация",
        links: &["Условия использования", "Конфиденциальность", "Правовая информация"],
    },
];

/// Look up a card by id. Returns `None` for ids outside the catalog.
pub fn find_card(id: u32) -> Option<&'static GiftCard> {
    GIFT_CARDS.iter().find(|card| card.id == id)
}
