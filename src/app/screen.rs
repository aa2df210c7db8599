// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

/// Back-office record sections reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Agencies,
    Agents,
    Cities,
    Contracts,
    Employees,
    Trademarks,
    Renewals,
    Areas,
    Users,
}

impl Section {
    pub const ALL: [Section; 9] = [
        Section::Agencies,
        Section::Agents,
        Section::Cities,
        Section::Contracts,
        Section::Employees,
        Section::Trademarks,
        Section::Renewals,
        Section::Areas,
        Section::Users,
    ];

    /// Returns the i18n key of the section label.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Section::Agencies => "section-agencies",
            Section::Agents => "section-agents",
            Section::Cities => "section-cities",
            Section::Contracts => "section-contracts",
            Section::Employees => "section-employees",
            Section::Trademarks => "section-trademarks",
            Section::Renewals => "section-renewals",
            Section::Areas => "section-areas",
            Section::Users => "section-users",
        }
    }
}

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Section(Section),
    Settings,
}

impl Default for Screen {
    fn default() -> Self {
        Screen::Section(Section::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn section_keys_are_unique() {
        let keys: HashSet<_> = Section::ALL.iter().map(|s| s.i18n_key()).collect();
        assert_eq!(keys.len(), Section::ALL.len());
    }

    #[test]
    fn default_screen_is_first_section() {
        assert_eq!(Screen::default(), Screen::Section(Section::Agencies));
    }
}
