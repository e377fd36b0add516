//! Down payment assistance programme descriptions.
//!
//! A static lookup table for presentation layers. It describes programmes; it
//! does not decide eligibility.

use serde::Serialize;

/// Descriptive information about an assistance programme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssistanceProgram {
    /// Programme name as shown to users.
    pub name: &'static str,
    /// Short description.
    pub description: &'static str,
    /// Key benefits, in display order.
    pub benefits: &'static [&'static str],
    /// Official information page.
    pub url: &'static str,
}

static PROGRAMS: [AssistanceProgram; 3] = [
    AssistanceProgram {
        name: "First-Time Homebuyer Programs",
        description: "Explore down payment assistance programs designed specifically for \
            first-time homebuyers. These programs can provide grants, low-interest loans, or \
            tax credits to help with your down payment.",
        benefits: &[
            "Down payment assistance up to $10,000",
            "Low or no interest loans",
            "Tax credits and incentives",
            "Educational resources and counseling",
        ],
        url: "https://www.hud.gov/topics/buying_a_home",
    },
    AssistanceProgram {
        name: "FHA Loans",
        description: "Federal Housing Administration loans offer flexible qualification \
            requirements and low down payment options. Perfect for first-time buyers or those \
            with limited savings.",
        benefits: &[
            "As low as 3.5% down payment",
            "Flexible credit requirements",
            "Competitive interest rates",
            "Gift funds allowed for down payment",
        ],
        url: "https://www.hud.gov/fha",
    },
    AssistanceProgram {
        name: "VA Loans",
        description: "Veterans Affairs loans provide exclusive benefits for active military, \
            veterans, and eligible surviving spouses. These loans offer exceptional terms and \
            no down payment requirement.",
        benefits: &[
            "0% down payment required",
            "No private mortgage insurance (PMI)",
            "Competitive interest rates",
            "No prepayment penalties",
        ],
        url: "https://www.va.gov/housing-assistance/home-loans/",
    },
];

static GENERIC_PROGRAM: AssistanceProgram = AssistanceProgram {
    name: "Assistance Program",
    description: "Learn more about this assistance program and see if you qualify.",
    benefits: &[
        "Check eligibility requirements",
        "View program details",
        "Apply online",
    ],
    url: "https://www.hud.gov/",
};

/// Returns every known programme.
#[must_use]
pub fn all() -> &'static [AssistanceProgram] {
    &PROGRAMS
}

/// Finds a programme by name, ignoring case and surrounding whitespace.
#[must_use]
pub fn find(name: &str) -> Option<&'static AssistanceProgram> {
    let name = name.trim();
    PROGRAMS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

/// Returns the programme with this name, or general HUD guidance if unknown.
#[must_use]
pub fn lookup(name: &str) -> &'static AssistanceProgram {
    find(name).unwrap_or(&GENERIC_PROGRAM)
}
