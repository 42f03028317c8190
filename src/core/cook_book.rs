use crate::domain::model::{IngredientRecord, RecipeCatalog};
use crate::utils::error::{EtlError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub const INGREDIENT_DELIMITER: &str = " | ";

const STREAM_SOURCE: &str = "<stream>";

struct PendingDish {
    name: String,
    expected: usize,
    ingredients: Vec<IngredientRecord>,
}

/// 讀取食譜檔並解析成 [`RecipeCatalog`]
pub fn read_cook_book<P: AsRef<Path>>(path: P) -> Result<RecipeCatalog> {
    let path = path.as_ref();
    tracing::debug!("Reading cook book from: {}", path.display());

    let file = File::open(path).map_err(|source| EtlError::FileReadError {
        path: path.to_path_buf(),
        source,
    })?;

    parse_with_source(BufReader::new(file), path)
}

/// Parses a recipe source held in any buffered reader.
///
/// Each block is a dish name, then the ingredient count on the very next
/// line, then that many `name | quantity | measure` lines. Blank lines
/// between blocks and between ingredient lines are ignored.
pub fn parse_cook_book<R: BufRead>(reader: R) -> Result<RecipeCatalog> {
    parse_with_source(reader, Path::new(STREAM_SOURCE))
}

fn parse_with_source<R: BufRead>(reader: R, source: &Path) -> Result<RecipeCatalog> {
    let read_error = |source_err| EtlError::FileReadError {
        path: source.to_path_buf(),
        source: source_err,
    };

    let mut catalog = RecipeCatalog::new();
    let mut pending: Option<PendingDish> = None;
    let mut last_line = 0;
    let mut lines = reader.lines().enumerate().map(|(idx, line)| (idx + 1, line));

    while let Some((line_no, raw)) = lines.next() {
        last_line = line_no;
        let raw = raw.map_err(read_error)?;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        match pending.take() {
            None => {
                let name = line.to_string();

                // 數量必須緊接在菜名的下一行
                let (count_line_no, count_raw) = match lines.next() {
                    Some((n, count)) => (n, count.map_err(read_error)?),
                    None => {
                        return Err(EtlError::MalformedRecipeFile {
                            line: line_no + 1,
                            reason: format!("missing ingredient count for dish '{}'", name),
                        })
                    }
                };
                last_line = count_line_no;

                let expected = parse_count(&name, count_raw.trim(), count_line_no)?;
                if expected == 0 {
                    finish_dish(&mut catalog, name, Vec::new());
                } else {
                    pending = Some(PendingDish {
                        name,
                        expected,
                        ingredients: Vec::new(),
                    });
                }
            }
            Some(mut dish) => {
                dish.ingredients.push(parse_ingredient(line, line_no)?);
                if dish.ingredients.len() == dish.expected {
                    finish_dish(&mut catalog, dish.name, dish.ingredients);
                } else {
                    pending = Some(dish);
                }
            }
        }
    }

    if let Some(dish) = pending {
        return Err(EtlError::MalformedRecipeFile {
            line: last_line,
            reason: format!(
                "dish '{}' declares {} ingredients but the file ends after {}",
                dish.name,
                dish.expected,
                dish.ingredients.len()
            ),
        });
    }

    tracing::debug!("Parsed {} dishes from {}", catalog.len(), source.display());
    Ok(catalog)
}

fn parse_count(dish: &str, value: &str, line_no: usize) -> Result<usize> {
    value.parse::<usize>().map_err(|_| EtlError::MalformedRecipeFile {
        line: line_no,
        reason: format!(
            "expected ingredient count for dish '{}', found '{}'",
            dish, value
        ),
    })
}

fn parse_ingredient(line: &str, line_no: usize) -> Result<IngredientRecord> {
    let fields: Vec<&str> = line.split(INGREDIENT_DELIMITER).collect();
    let [name, quantity, measure] = fields.as_slice() else {
        return Err(EtlError::MalformedRecipeFile {
            line: line_no,
            reason: format!(
                "expected 'name | quantity | measure', found {} field(s)",
                fields.len()
            ),
        });
    };

    let quantity = quantity
        .trim()
        .parse::<u64>()
        .map_err(|_| EtlError::MalformedRecipeFile {
            line: line_no,
            reason: format!("invalid quantity '{}' for ingredient '{}'", quantity, name),
        })?;

    Ok(IngredientRecord::new(*name, quantity, *measure))
}

fn finish_dish(catalog: &mut RecipeCatalog, name: String, ingredients: Vec<IngredientRecord>) {
    if catalog.contains_key(&name) {
        tracing::debug!("Dish '{}' declared again, replacing previous ingredients", name);
    }
    catalog.insert(name, ingredients);
}
