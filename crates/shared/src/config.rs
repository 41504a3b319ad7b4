/// Static site configuration
pub struct Config {
    pub name: &'static str,
    pub tagline: &'static str,

    /// Currency label shown in the amount column header
    pub currency: &'static str,

    pub api: Api,
}

/// Proxy endpoints the browser fetches through
pub struct Api {
    pub contributions: &'static str,
    pub disbursements: &'static str,
}

pub static CONFIG: Config = Config {
    name: "Community Relief Fund",
    tagline: "contributions and disbursements, month by month",

    currency: "BDT",

    api: Api {
        contributions: "/api/contributions",
        disbursements: "/api/disbursements",
    },
};
