// Everything on the card that does not come from the GitHub API lives here,
// compiled in rather than configured at runtime.

pub struct SiteContent {
    pub account: &'static str,
    pub owner: &'static str,
    pub display_name: &'static str,
    pub tagline: &'static str,
    pub flag: &'static str,
    pub birth_year: i32,
    pub experience_since: i32,
    pub badge_title: &'static str,
    pub badge_xp: &'static str,
    pub badge_icon: &'static str,
    pub about: &'static str,
    pub technologies: &'static [&'static str],
    pub publications: &'static [(&'static str, &'static str)],
    pub top_repositories: &'static [(&'static str, &'static str)],
    pub linkedin_url: &'static str,
    pub twitter_url: &'static str,
    pub copyright_since: i32,
}

pub const SITE: SiteContent = SiteContent {
    account: "ThaMoreira",
    owner: "Thaís Moreira",
    display_name: "Tha Moreira",
    tagline: "Transforming code into solutions one line at the time",
    flag: "br",
    birth_year: 1996,
    experience_since: 2021,
    badge_title: "Mid Software Developer",
    badge_xp: "12,649",
    badge_icon: "/badge.png",
    about: "Hi, I'm Thaís Moreira, a Software Developer with experience building \
            systems and applications scalable in the e-commerce and industry \
            (SAP Software Solutions).",
    technologies: &["JavaScript", "TypeScript", "NodeJS"],
    publications: &[
        (
            "Hexavalent chromium bioadsorption through flamboyant seed biomass",
            "https://joins.emnuvens.com.br/joins/article/view/37/30",
        ),
        (
            "NASA Simulation Exploration Experience 2020",
            "https://youtu.be/O7asaD9iUeI?t=8003",
        ),
        (
            "NASA Simulation Exploration Experience 2019",
            "https://www.liophant.org/conferences/2019/wams/wams2019_overall_p.pdf#page=57",
        ),
        (
            "NASA Simulation Exploration Experience 2018",
            "https://www.liophant.org/conferences/2018/wams/wams2018_proceedings.pdf#page=13",
        ),
    ],
    top_repositories: &[("Livro de Receitas", "https://github.com/ThaMoreira/Angular")],
    linkedin_url: "https://www.linkedin.com/in/tha-moreira",
    twitter_url: "https://twitter.com/thaMoreira13",
    copyright_since: 2025,
};

impl SiteContent {
    pub fn github_url(&self) -> String {
        format!("https://github.com/{}", self.account)
    }

    pub fn avatar_url(&self) -> String {
        format!("https://github.com/{}.png", self.account)
    }

    // The card's "Level" is the owner's age, Steam-style.
    pub fn level(&self, current_year: i32) -> i32 {
        current_year - self.birth_year
    }

    pub fn years_of_service(&self, current_year: i32) -> i32 {
        current_year - self.experience_since
    }
}
