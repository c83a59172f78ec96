use anchor_lang::prelude::*;

use crate::{
    constants::{MAX_DESCRIPTION_LEN, MAX_NAME_LEN},
    errors::FixedPriceSaleError,
};

#[account]
#[derive(InitSpace)]
pub struct Store {
    pub admin: Pubkey,
    #[max_len(40)]
    pub name: String,
    #[max_len(60)]
    pub description: String,
}

impl Store {
    pub fn new(admin: Pubkey, name: String, description: String) -> Result<Self> {
        require!(!name.is_empty(), FixedPriceSaleError::InvalidParameter);
        validate_labels(&name, &description)?;

        Ok(Self {
            admin,
            name,
            description,
        })
    }
}

/// Length checks shared by stores and markets.
pub fn validate_labels(name: &str, description: &str) -> Result<()> {
    require!(name.len() <= MAX_NAME_LEN, FixedPriceSaleError::NameIsTooLong);
    require!(
        description.len() <= MAX_DESCRIPTION_LEN,
        FixedPriceSaleError::DescriptionIsTooLong
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::assert_error;

    #[test]
    fn store_keeps_admin_and_labels() {
        let admin = Pubkey::new_unique();
        let store = Store::new(admin, "Store".into(), "Description".into()).unwrap();

        assert_eq!(store.admin, admin);
        assert_eq!(store.name, "Store");
        assert_eq!(store.description, "Description");
    }

    #[test]
    fn store_requires_a_name() {
        let result = Store::new(Pubkey::new_unique(), String::new(), String::new());
        assert_error(result, FixedPriceSaleError::InvalidParameter);
    }

    #[test]
    fn store_rejects_long_labels() {
        let long_name = "n".repeat(MAX_NAME_LEN + 1);
        let result = Store::new(Pubkey::new_unique(), long_name, String::new());
        assert_error(result, FixedPriceSaleError::NameIsTooLong);

        let long_description = "d".repeat(MAX_DESCRIPTION_LEN + 1);
        let result = Store::new(Pubkey::new_unique(), "Store".into(), long_description);
        assert_error(result, FixedPriceSaleError::DescriptionIsTooLong);
    }

    #[test]
    fn store_accepts_labels_at_the_limit() {
        let name = "n".repeat(MAX_NAME_LEN);
        let description = "d".repeat(MAX_DESCRIPTION_LEN);
        assert!(Store::new(Pubkey::new_unique(), name, description).is_ok());
    }
}
