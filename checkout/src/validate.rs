use std::collections::BTreeMap;

use validator::Validate;

use common::address::{AddressField, ReqShippingAddress};
use common::error::format_errors;

/// 表单校验结果, 按表单字段顺序保存每个字段的第一条错误信息
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<AddressField, String>,
}

impl FieldErrors {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn get(&self, field: AddressField) -> Option<&str> {
        self.errors.get(&field).map(|val| val.as_str())
    }

    pub fn insert(&mut self, field: AddressField, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn remove(&mut self, field: AddressField) -> Option<String> {
        self.errors.remove(&field)
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (AddressField, &str)> {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    /// 所有错误合并为一句话, 用于服务端返回
    pub fn summary(&self) -> String {
        self.errors
            .values()
            .map(|val| val.as_str())
            .collect::<Vec<&str>>()
            .join(". ")
    }
}

/// 按收货地址规则校验表单
pub fn validate_shipping_address(values: &ReqShippingAddress) -> FieldErrors {
    let mut report = FieldErrors::default();

    if let Err(e) = values.validate() {
        for (name, message) in format_errors(&e) {
            match AddressField::from_name(&name) {
                Some(field) => report.insert(field, message),
                None => tracing::warn!(field = %name, "unknown shipping address field"),
            }
        }
    }

    report
}

#[cfg(test)]
mod test {
    use super::*;

    fn empty_address() -> ReqShippingAddress {
        ReqShippingAddress {
            full_name: String::new(),
            street_address: String::new(),
            city: String::new(),
            postal_code: String::new(),
            country: String::new(),
        }
    }

    #[test]
    fn valid_address_has_no_errors() {
        let report = validate_shipping_address(&ReqShippingAddress::default_values());
        assert!(report.is_valid());
        assert_eq!(report.summary(), "");
    }

    #[test]
    fn every_empty_field_is_reported() {
        let report = validate_shipping_address(&empty_address());

        assert!(!report.is_valid());
        assert_eq!(report.len(), 5);
        assert_eq!(
            report.get(AddressField::FullName),
            Some("Name must be at least 3 characters")
        );
        assert_eq!(
            report.get(AddressField::StreetAddress),
            Some("Address must be at least 3 characters")
        );
        assert_eq!(
            report.get(AddressField::City),
            Some("City must be at least 3 characters")
        );
        assert_eq!(
            report.get(AddressField::PostalCode),
            Some("Postal code must be at least 3 characters")
        );
        assert_eq!(
            report.get(AddressField::Country),
            Some("Country must be at least 3 characters")
        );
    }

    #[test]
    fn summary_follows_form_order() {
        let mut values = ReqShippingAddress::default_values();
        values.country = "US".to_string();
        values.full_name = "Al".to_string();

        let report = validate_shipping_address(&values);
        assert_eq!(
            report.summary(),
            "Name must be at least 3 characters. Country must be at least 3 characters"
        );
        let fields = report.iter().map(|(field, _)| field).collect::<Vec<_>>();
        assert_eq!(fields, vec![AddressField::FullName, AddressField::Country]);
    }

    #[test]
    fn length_counts_characters() {
        let mut values = ReqShippingAddress::default_values();
        values.city = "北京市".to_string();
        assert!(validate_shipping_address(&values).is_valid());
    }
}
