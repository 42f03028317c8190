use crate::utils::error::{EtlError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| EtlError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// 菜名不可包含欄位分隔符，否則無法對應到食譜檔中的任何一道菜
pub fn validate_dish_names(field_name: &str, dishes: &[String]) -> Result<()> {
    for dish in dishes {
        validate_non_empty_string(field_name, dish)?;
        if dish.contains(" | ") {
            return Err(EtlError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: dish.clone(),
                reason: "Dish names cannot contain the ' | ' delimiter".to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("recipes.path", "files/recipes.txt").is_ok());
        assert!(validate_path("recipes.path", "").is_err());
        assert!(validate_path("recipes.path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some(3);
        let missing: Option<i32> = None;
        assert_eq!(*validate_required_field("merge", &present).unwrap(), 3);
        assert!(matches!(
            validate_required_field("merge", &missing),
            Err(EtlError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_validate_dish_names() {
        let dishes = vec!["Омлет".to_string(), "Утка по-пекински".to_string()];
        assert!(validate_dish_names("shop_list.dishes", &dishes).is_ok());

        let blank = vec!["   ".to_string()];
        assert!(validate_dish_names("shop_list.dishes", &blank).is_err());

        let delimited = vec!["Омлет | 2".to_string()];
        assert!(validate_dish_names("shop_list.dishes", &delimited).is_err());
    }
}
