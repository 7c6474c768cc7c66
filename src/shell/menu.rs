//! The fixed navigation table and its role filter.
//!
//! Presentation-only: hiding an entry does not block direct navigation to
//! its route. Authorization is the backend's job.

use crate::models::enums::Role;

/// One navigation entry in the dashboard sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub route: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub roles: &'static [Role],
}

impl MenuEntry {
    pub fn allows(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

const ALL_ROLES: &[Role] = &[Role::Admin, Role::Doctor, Role::Nurse, Role::Receptionist];
const CLINICAL: &[Role] = &[Role::Admin, Role::Doctor, Role::Nurse];

/// The full menu, in display order.
pub const MENU: &[MenuEntry] = &[
    MenuEntry {
        route: "/dashboard",
        label: "Dashboard",
        icon: "📊",
        roles: ALL_ROLES,
    },
    MenuEntry {
        route: "/dashboard/patients",
        label: "Patients",
        icon: "👥",
        roles: ALL_ROLES,
    },
    MenuEntry {
        route: "/dashboard/appointments",
        label: "Appointments",
        icon: "📅",
        roles: ALL_ROLES,
    },
    MenuEntry {
        route: "/dashboard/billing",
        label: "Billing",
        icon: "💰",
        roles: &[Role::Admin, Role::Receptionist],
    },
    MenuEntry {
        route: "/dashboard/pharmacy",
        label: "Pharmacy",
        icon: "💊",
        roles: CLINICAL,
    },
    MenuEntry {
        route: "/dashboard/prescriptions",
        label: "Prescriptions",
        icon: "📋",
        roles: CLINICAL,
    },
    MenuEntry {
        route: "/dashboard/reports",
        label: "Reports",
        icon: "📈",
        roles: &[Role::Admin, Role::Doctor],
    },
    MenuEntry {
        route: "/dashboard/users",
        label: "Users",
        icon: "👤",
        roles: &[Role::Admin],
    },
    MenuEntry {
        route: "/dashboard/settings",
        label: "Settings",
        icon: "⚙️",
        roles: &[Role::Admin],
    },
];

/// The subsequence of `MENU` visible to a role, in table order.
pub fn visible_menu(role: Role) -> Vec<&'static MenuEntry> {
    MENU.iter().filter(|entry| entry.allows(role)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(role: Role) -> Vec<&'static str> {
        visible_menu(role).iter().map(|e| e.label).collect()
    }

    #[test]
    fn admin_sees_everything_in_order() {
        assert_eq!(
            labels(Role::Admin),
            [
                "Dashboard",
                "Patients",
                "Appointments",
                "Billing",
                "Pharmacy",
                "Prescriptions",
                "Reports",
                "Users",
                "Settings"
            ]
        );
    }

    #[test]
    fn receptionist_sees_front_desk_entries() {
        assert_eq!(
            labels(Role::Receptionist),
            ["Dashboard", "Patients", "Appointments", "Billing"]
        );
    }

    #[test]
    fn nurse_has_no_billing_or_reports() {
        let visible = labels(Role::Nurse);
        assert!(!visible.contains(&"Billing"));
        assert!(!visible.contains(&"Reports"));
        assert!(visible.contains(&"Pharmacy"));
    }

    #[test]
    fn doctor_sees_reports_but_not_users() {
        let visible = labels(Role::Doctor);
        assert!(visible.contains(&"Reports"));
        assert!(!visible.contains(&"Users"));
        assert!(!visible.contains(&"Settings"));
    }
}
