//! Practice details shared by the page sections.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteConfig {
    pub practitioner: &'static str,
    pub email: &'static str,
    /// Display form of the phone number.
    pub phone: &'static str,
    /// `tel:` form of the phone number.
    pub phone_href: &'static str,
    /// Form name expected by the hosting platform's form handler.
    pub form_name: &'static str,
    /// Origin to post to when the page origin cannot be read (native builds).
    pub fallback_origin: &'static str,
    pub map_embed_url: &'static str,
    /// How long a contact-form notice stays on screen.
    pub notice_ms: u32,
}

pub const SITE: SiteConfig = SiteConfig {
    practitioner: "Natalia Mordach",
    email: "kontakt@nataliamordach.pl",
    phone: "+48 XXX XXX XXX",
    phone_href: "tel:+48XXXXXXXXX",
    form_name: "contact",
    fallback_origin: "https://nataliamordach.pl",
    map_embed_url: "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d39102.82694675702!2d20.93690134863282!3d52.226549800000015!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x471ecd423f3000cf%3A0xff1cb2d3bbc26edd!2sPsychoterapeuta%20psychodynamiczny%20Natalia%20Mordach!5e0!3m2!1suk!2spl!4v1768143093964!5m2!1suk!2spl",
    notice_ms: 5_000,
};

/// In-page anchors, in navigation order, paired with their catalog label key.
pub const SECTIONS: [(&str, &str); 6] = [
    ("o-mnie", "nav.about"),
    ("oferta", "nav.services"),
    ("dla-kogo", "nav.forWho"),
    ("cennik", "nav.pricing"),
    ("lokalizacja", "nav.location"),
    ("kontakt", "nav.contact"),
];
