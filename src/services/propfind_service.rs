use crate::error::AppError;
use crate::models::item_status::ItemStatus;
use crate::models::multistatus::{PropStat, Property, StatusRecord, STATUS_NOT_FOUND, STATUS_OK};
use crate::models::request::PropFind;

pub const RESOURCE_TYPE: &str = "resourcetype";
pub const CONTENT_LENGTH: &str = "getcontentlength";
pub const LAST_MODIFIED: &str = "getlastmodified";
pub const CONTENT_TYPE: &str = "getcontenttype";
pub const ETAG: &str = "getetag";

const COLLECTION: &str = "collection";
const HTTP_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Builds the `<response>` record for one listed item.
pub fn propfind_item(propfind: &PropFind, item: &ItemStatus) -> Result<StatusRecord, AppError> {
    if !item.path.starts_with('/') {
        return Err(AppError::InvalidItem(format!(
            "path is not absolute: {}",
            item.path
        )));
    }

    let available = available_props(item)?;
    let propstats = match propfind {
        PropFind::AllProp => vec![PropStat {
            status: STATUS_OK,
            props: available,
        }],
        PropFind::PropName => vec![PropStat {
            status: STATUS_OK,
            props: available
                .into_iter()
                .map(|p| Property {
                    name: p.name,
                    value: None,
                })
                .collect(),
        }],
        PropFind::Prop(names) => select_props(available, names),
    };

    Ok(StatusRecord {
        href: href_for(item),
        propstats,
    })
}

fn href_for(item: &ItemStatus) -> String {
    if item.is_dir && !item.path.ends_with('/') {
        format!("{}/", item.path)
    } else {
        item.path.clone()
    }
}

fn available_props(item: &ItemStatus) -> Result<Vec<Property>, AppError> {
    let resource_type = if item.is_dir { COLLECTION } else { "" };
    let mut props = vec![property(RESOURCE_TYPE, resource_type)];
    if item.is_dir {
        return Ok(props);
    }

    props.push(property(CONTENT_LENGTH, &item.size.to_string()));
    if let Some(modified_at) = item.modified_at {
        props.push(property(
            LAST_MODIFIED,
            &modified_at.format(HTTP_DATE_FORMAT).to_string(),
        ));
    }
    if let Some(mime_type) = &item.mime_type {
        props.push(property(CONTENT_TYPE, mime_type));
    }
    if let Some(etag) = &item.etag {
        if etag.contains('"') {
            return Err(AppError::InvalidItem(format!(
                "etag of {} contains a quote",
                item.path
            )));
        }
        props.push(property(ETAG, &format!("\"{etag}\"")));
    }
    Ok(props)
}

fn select_props(available: Vec<Property>, names: &[String]) -> Vec<PropStat> {
    let mut found = Vec::new();
    let mut missing = Vec::new();
    for name in names {
        match available.iter().find(|p| &p.name == name) {
            Some(prop) => found.push(prop.clone()),
            None => missing.push(Property {
                name: name.clone(),
                value: None,
            }),
        }
    }

    let mut propstats = Vec::new();
    if !found.is_empty() {
        propstats.push(PropStat {
            status: STATUS_OK,
            props: found,
        });
    }
    if !missing.is_empty() {
        propstats.push(PropStat {
            status: STATUS_NOT_FOUND,
            props: missing,
        });
    }
    propstats
}

fn property(name: &str, value: &str) -> Property {
    Property {
        name: name.to_string(),
        value: Some(value.to_string()),
    }
}
