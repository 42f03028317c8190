use crate::domain::model::{RecipeCatalog, ShoppingList};
use crate::utils::error::{EtlError, Result};

/// Sums the ingredients of `dishes` for `person_count` people.
///
/// Dishes are processed in the given order and their ingredients in source
/// order. When one ingredient shows up in several dishes the quantities add
/// up and the measure of the last occurrence wins.
pub fn shop_list_by_dishes(
    catalog: &RecipeCatalog,
    dishes: &[String],
    person_count: u32,
) -> Result<ShoppingList> {
    let mut shop_list = ShoppingList::new();

    for dish in dishes {
        let ingredients = catalog.get(dish).ok_or_else(|| EtlError::UnknownDish {
            dish: dish.clone(),
        })?;

        for ingredient in ingredients {
            let overflow = || EtlError::QuantityOverflow {
                ingredient: ingredient.ingredient_name.clone(),
            };
            let scaled = ingredient
                .quantity
                .checked_mul(u64::from(person_count))
                .ok_or_else(overflow)?;

            let item = shop_list
                .entry(ingredient.ingredient_name.clone())
                .or_default();
            if !item.measure.is_empty() && item.measure != ingredient.measure {
                tracing::debug!(
                    "Measure of '{}' changes from '{}' to '{}' in dish '{}'",
                    ingredient.ingredient_name,
                    item.measure,
                    ingredient.measure,
                    dish
                );
            }
            item.measure = ingredient.measure.clone();
            item.quantity = item.quantity.checked_add(scaled).ok_or_else(overflow)?;
        }
    }

    tracing::debug!(
        "Shopping list for {} dish(es) x {} person(s): {} ingredient(s)",
        dishes.len(),
        person_count,
        shop_list.len()
    );
    Ok(shop_list)
}
