use factorygen_core::{ModelDefinition, ProjectConfig, PropertyDescriptor, PropertyMap, Result};
use factorygen_introspect::SchemaIntrospector;

/// Semantic type applied to managed date columns regardless of storage type.
pub const DATETIME_TYPE: &str = "datetime";

/// Build the ordered property mapping for one model.
///
/// Resolution layers, highest priority first: name-based override,
/// type-based fallback, untyped default. The auto-incrementing primary key
/// and the managed created/updated timestamp columns are excluded entirely.
pub fn infer(
    definition: &ModelDefinition,
    introspector: &mut dyn SchemaIntrospector,
    config: &ProjectConfig,
) -> Result<PropertyMap> {
    // Remapping must land before columns are listed; the built-in enum rule
    // first so project overrides can still displace it.
    introspector.register_type_override("enum", "string");
    for (raw, semantic) in &config.type_overrides {
        introspector.register_type_override(raw, semantic);
    }

    let address = format!("{}{}", config.table_prefix, definition.table);
    let (database, table) = match address.split_once('.') {
        Some((database, table)) => (Some(database), table),
        None => (None, address.as_str()),
    };

    let fields = introspector.columns(database, table)?;
    let date_columns = definition.date_columns();

    let mut properties = PropertyMap::new();
    for field in &fields {
        if is_excluded(definition, &field.name) {
            continue;
        }
        let semantic_type = if date_columns.contains(&field.name.as_str()) {
            DATETIME_TYPE
        } else {
            field.storage_type.as_str()
        };
        set_property(&mut properties, &field.name, Some(semantic_type));
    }

    Ok(properties)
}

/// Fields never given a factory value: the auto-incrementing primary key
/// and the managed timestamp columns.
fn is_excluded(definition: &ModelDefinition, name: &str) -> bool {
    (definition.incrementing && definition.primary_key == name)
        || definition.created_at() == Some(name)
        || definition.updated_at() == Some(name)
}

/// Record a field in the mapping, upgrading its descriptor in place.
///
/// A name-based expression is never displaced by a type-based one; the
/// type fallback only fills fields with no expression yet.
pub fn set_property(properties: &mut PropertyMap, name: &str, semantic_type: Option<&str>) {
    let entry = properties
        .entry(name.to_string())
        .or_insert_with(PropertyDescriptor::untyped);

    if let Some(semantic_type) = semantic_type {
        entry.type_label = semantic_type.to_string();
    }

    if let Some(expression) = name_expression(name) {
        entry.fake_expression = Some(expression.to_string());
        return;
    }

    if !entry.has_fake()
        && let Some(expression) = semantic_type.and_then(type_expression)
    {
        entry.fake_expression = Some(expression.to_string());
    }
}

/// Semantically meaningful field names with a dedicated generator.
fn name_expression(name: &str) -> Option<&'static str> {
    match name {
        "name" => Some("Name().fake::<String>()"),
        "firstname" | "first_name" => Some("FirstName().fake::<String>()"),
        "lastname" | "last_name" => Some("LastName().fake::<String>()"),
        "street" => Some("StreetName().fake::<String>()"),
        "zip" | "postcode" => Some("ZipCode().fake::<String>()"),
        "city" => Some("CityName().fake::<String>()"),
        "country" => Some("CountryName().fake::<String>()"),
        "latitude" | "lat" => Some("Latitude().fake::<f64>()"),
        "longitude" | "lng" => Some("Longitude().fake::<f64>()"),
        "phone" | "phone_number" => Some("PhoneNumber().fake::<String>()"),
        "company" => Some("CompanyName().fake::<String>()"),
        "email" => Some("SafeEmail().fake::<String>()"),
        "username" | "user_name" => Some("Username().fake::<String>()"),
        "password" => Some("Password(12..24).fake::<String>()"),
        "url" => Some("format!(\"https://{}.example.com\", Username().fake::<String>())"),
        "remember_token" => Some("(10..11).fake::<String>()"),
        _ => None,
    }
}

/// Storage-type categories with a generic generator.
fn type_expression(semantic_type: &str) -> Option<&'static str> {
    match semantic_type {
        "string" => Some("Word().fake::<String>()"),
        "text" => Some("Sentence(4..10).fake::<String>()"),
        "date" => Some("Date().fake::<chrono::NaiveDate>()"),
        "time" => Some("Time().fake::<chrono::NaiveTime>()"),
        "guid" => Some("UUIDv4.fake::<String>()"),
        "datetime" | "datetimetz" => Some("DateTime().fake::<chrono::NaiveDateTime>()"),
        "integer" | "bigint" | "smallint" => Some("(0..1_000_000).fake::<i64>()"),
        "decimal" | "float" => Some("(0.0..1_000_000.0).fake::<f64>()"),
        "boolean" => Some("Boolean(50).fake::<bool>()"),
        _ => None,
    }
}
