use serde::{Deserialize, Serialize};

/// A string that does not belong to a closed wire enum.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {field}: {value:?}")]
pub struct InvalidEnum {
    pub field: &'static str,
    pub value: String,
}

/// Macro to generate enum with as_str + std::str::FromStr pattern.
/// Variants serialize to the backend's lowercase strings.
macro_rules! wire_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = InvalidEnum;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(InvalidEnum {
                        field: stringify!($name),
                        value: s.into(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

wire_enum!(Role {
    Admin => "admin",
    Doctor => "doctor",
    Nurse => "nurse",
    Receptionist => "receptionist",
});

wire_enum!(Gender {
    Male => "male",
    Female => "female",
    Other => "other",
});

wire_enum!(AppointmentStatus {
    Scheduled => "scheduled",
    Completed => "completed",
    Cancelled => "cancelled",
});

wire_enum!(BillStatus {
    Pending => "pending",
    Paid => "paid",
    Cancelled => "cancelled",
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn role_round_trips_through_str() {
        for role in [Role::Admin, Role::Doctor, Role::Nurse, Role::Receptionist] {
            assert_eq!(Role::from_str(role.as_str()).unwrap(), role);
        }
    }

    #[test]
    fn unknown_value_is_rejected() {
        let err = Role::from_str("superuser").unwrap_err();
        assert_eq!(err.field, "Role");
        assert_eq!(err.value, "superuser");
    }

    #[test]
    fn serde_uses_lowercase_wire_strings() {
        assert_eq!(
            serde_json::to_string(&Role::Receptionist).unwrap(),
            "\"receptionist\""
        );
        assert_eq!(
            serde_json::from_str::<BillStatus>("\"paid\"").unwrap(),
            BillStatus::Paid
        );
        assert_eq!(
            serde_json::to_string(&AppointmentStatus::Scheduled).unwrap(),
            "\"scheduled\""
        );
    }
}
