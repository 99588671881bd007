//! Signup request factories

use croft_core::{NewAccount, RoleDetails};

/// Password every factory-made account signs up with
pub const PASSWORD: &str = "barley-moon-42";

fn base(email: &str, details: RoleDetails) -> NewAccount {
    NewAccount {
        email: email.to_string(),
        password: PASSWORD.to_string(),
        first_name: "Ada".to_string(),
        last_name: "Moss".to_string(),
        phone: "07000 000000".to_string(),
        city: "Inverness".to_string(),
        details,
    }
}

/// A well-formed farmer signup
pub fn farmer(email: &str) -> NewAccount {
    base(
        email,
        RoleDetails::Farmer {
            farm_name: "Moss Croft".to_string(),
            farm_address: "Glen Road 1, Inverness".to_string(),
        },
    )
}

/// A well-formed consumer signup
pub fn consumer(email: &str) -> NewAccount {
    base(
        email,
        RoleDetails::Consumer {
            delivery_address: "Pier 3, Oban".to_string(),
        },
    )
}
