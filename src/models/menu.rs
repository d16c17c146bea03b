use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::common::IdName;

// ==================================================================================================
// Request Models
// ==================================================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NomenclatureRequest<'a> {
    pub organization_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_revision: Option<i64>,
}

/// Body of POST /api/2/menu/by_id
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuByIdRequest {
    pub external_menu_id: String,
    pub organization_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_category_id: Option<String>,
}

impl MenuByIdRequest {
    pub fn new(external_menu_id: impl Into<String>, organization_ids: Vec<String>) -> Self {
        Self {
            external_menu_id: external_menu_id.into(),
            organization_ids,
            price_category_id: None,
        }
    }

    pub fn with_price_category(mut self, id: impl Into<String>) -> Self {
        self.price_category_id = Some(id.into());
        self
    }
}

// ==================================================================================================
// Nomenclature
// ==================================================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NomenclatureGroup {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image_links: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_group: Option<String>,
    #[serde(default)]
    pub order: i64,
    #[serde(default)]
    pub is_included_in_menu: bool,
    #[serde(default)]
    pub is_group_modifier: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_deleted: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_keywords: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_title: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCategory {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub is_deleted: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Size {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizePrice {
    #[serde(default)]
    pub current_price: f64,
    #[serde(default)]
    pub is_included_in_menu: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_price: Option<f64>,
    #[serde(default)]
    pub next_included_in_menu: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_date_price: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizePriceItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_id: Option<String>,
    pub price: SizePrice,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Modifier {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_amount: Option<i64>,
    #[serde(default)]
    pub min_amount: i64,
    #[serde(default)]
    pub max_amount: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_if_default_amount: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub splittable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub free_of_charge_amount: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupModifier {
    pub id: String,
    #[serde(default)]
    pub min_amount: i64,
    #[serde(default)]
    pub max_amount: i64,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child_modifiers_have_min_max_restrictions: Option<bool>,
    #[serde(default)]
    pub child_modifiers: Vec<Modifier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_if_default_amount: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_amount: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub splittable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub free_of_charge_amount: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_deleted: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proteins_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbohydrates_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat_full_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proteins_full_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbohydrates_full_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy_full_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_category_id: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default)]
    pub order_item_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifier_schema_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifier_schema_name: Option<String>,
    #[serde(default)]
    pub splittable: bool,
    #[serde(default)]
    pub measure_unit: String,
    #[serde(default)]
    pub size_prices: Vec<SizePriceItem>,
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    #[serde(default)]
    pub group_modifiers: Vec<GroupModifier>,
    #[serde(default)]
    pub image_links: Vec<String>,
    #[serde(default)]
    pub do_not_print_in_cheque: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_group: Option<String>,
    #[serde(default)]
    pub order: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name_english: Option<String>,
    #[serde(default)]
    pub use_balance_for_sell: bool,
    #[serde(default)]
    pub can_set_open_price: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_keywords: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_title: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NomenclatureResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,
    #[serde(default)]
    pub groups: Vec<NomenclatureGroup>,
    #[serde(default)]
    pub product_categories: Vec<ProductCategory>,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub sizes: Vec<Size>,
    pub revision: i64,
}

// ==================================================================================================
// External Menus
// ==================================================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,
    #[serde(default)]
    pub external_menus: Vec<IdName>,
    #[serde(default)]
    pub price_categories: Vec<IdName>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllergenGroup {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxCategory {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub percentage: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationPrice {
    pub organization_id: String,
    #[serde(default)]
    pub price: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restrictions {
    #[serde(default)]
    pub min_quantity: i64,
    #[serde(default)]
    pub max_quantity: i64,
    #[serde(default)]
    pub free_quantity: i64,
    #[serde(default)]
    pub by_default: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifierGroupItem {
    pub item_id: String,
    #[serde(default)]
    pub prices: Vec<OrganizationPrice>,
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_image: Option<String>,
    #[serde(default)]
    pub restrictions: Restrictions,
    #[serde(default)]
    pub allergen_groups: Vec<AllergenGroup>,
    #[serde(default)]
    pub nutrition_per_hundred_grams: HashMap<String, serde_json::Value>,
    #[serde(default)]
    pub portion_weight_grams: f64,
    #[serde(default)]
    pub tags: Vec<IdName>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifierGroup {
    pub item_group_id: String,
    #[serde(default)]
    pub items: Vec<ModifierGroupItem>,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub restrictions: Restrictions,
    #[serde(default)]
    pub can_be_divided: bool,
    #[serde(default)]
    pub child_modifiers_have_min_max_restrictions: bool,
    #[serde(default)]
    pub sku: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSize {
    #[serde(default)]
    pub prices: Vec<OrganizationPrice>,
    #[serde(default)]
    pub item_modifier_groups: Vec<ModifierGroup>,
    #[serde(default)]
    pub sku: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
    #[serde(default)]
    pub portion_weight_grams: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_id: Option<String>,
    #[serde(default)]
    pub nutrition_per_hundred_grams: HashMap<String, serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_image_cropped_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub item_id: String,
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub allergen_groups: Vec<AllergenGroup>,
    #[serde(
        default,
        alias = "modofierSchemaId",
        skip_serializing_if = "Option::is_none"
    )]
    pub modifier_schema_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_category: Option<TaxCategory>,
    #[serde(default)]
    pub order_item_type: String,
    #[serde(default)]
    pub item_sizes: Vec<ItemSize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemCategory {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_image_url: Option<String>,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuByIdResponse {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub item_categories: Vec<MenuItemCategory>,
}
