use serde::{Deserialize, Serialize};
use validator::Validate;

/// 收货地址表单字段
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReqShippingAddress {
    #[validate(length(min = 3, message = "Name must be at least 3 characters"))]
    pub full_name: String,
    #[validate(length(min = 3, message = "Address must be at least 3 characters"))]
    pub street_address: String,
    #[validate(length(min = 3, message = "City must be at least 3 characters"))]
    pub city: String,
    #[validate(length(min = 3, message = "Postal code must be at least 3 characters"))]
    pub postal_code: String,
    #[validate(length(min = 3, message = "Country must be at least 3 characters"))]
    pub country: String,
}

impl ReqShippingAddress {
    /// 用户没有保存过地址时使用的默认值
    pub fn default_values() -> Self {
        Self {
            full_name: "John Doe".to_string(),
            street_address: "123 Main St".to_string(),
            city: "Anytown".to_string(),
            postal_code: "12345".to_string(),
            country: "USA".to_string(),
        }
    }

    pub fn get(&self, field: AddressField) -> &str {
        match field {
            AddressField::FullName => &self.full_name,
            AddressField::StreetAddress => &self.street_address,
            AddressField::City => &self.city,
            AddressField::PostalCode => &self.postal_code,
            AddressField::Country => &self.country,
        }
    }

    pub fn set(&mut self, field: AddressField, value: String) {
        let slot = match field {
            AddressField::FullName => &mut self.full_name,
            AddressField::StreetAddress => &mut self.street_address,
            AddressField::City => &mut self.city,
            AddressField::PostalCode => &mut self.postal_code,
            AddressField::Country => &mut self.country,
        };
        *slot = value;
    }
}

/// 地址字段, 顺序即表单渲染顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AddressField {
    FullName,
    StreetAddress,
    City,
    PostalCode,
    Country,
}

impl AddressField {
    pub const ALL: [AddressField; 5] = [
        AddressField::FullName,
        AddressField::StreetAddress,
        AddressField::City,
        AddressField::PostalCode,
        AddressField::Country,
    ];

    /// 序列化后的字段名
    pub fn name(&self) -> &'static str {
        match self {
            AddressField::FullName => "fullName",
            AddressField::StreetAddress => "streetAddress",
            AddressField::City => "city",
            AddressField::PostalCode => "postalCode",
            AddressField::Country => "country",
        }
    }

    /// 同时接受结构体字段名和序列化字段名
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "full_name" | "fullName" => Some(AddressField::FullName),
            "street_address" | "streetAddress" => Some(AddressField::StreetAddress),
            "city" => Some(AddressField::City),
            "postal_code" | "postalCode" => Some(AddressField::PostalCode),
            "country" => Some(AddressField::Country),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AddressField::FullName => "Enter your full name",
            AddressField::StreetAddress => "Address",
            AddressField::City => "City",
            AddressField::PostalCode => "Postal Code",
            AddressField::Country => "Country",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            AddressField::FullName => "Enter full name",
            AddressField::StreetAddress => "Enter Address",
            AddressField::City => "Enter City",
            AddressField::PostalCode => "Enter Postal Code",
            AddressField::Country => "Enter Country",
        }
    }
}
