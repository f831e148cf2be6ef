//! # Rendering Module
//!
//! Turns products and aggregates into terminal text. Everything here returns
//! a `String` so it can be tested without a terminal; colors come from
//! [`THEME`] and disappear automatically when stdout is not a tty.
//!
//! Column widths follow the content, bounded below by the header and above
//! by a fixed cap per column. Cells wider than the cap are truncated with an
//! ellipsis.

use super::styles::THEME;
use stockroom::inventory::Summary;
use stockroom::model::Product;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const BANNER_WIDTH: usize = 60;
const SEPARATOR: &str = " | ";

const CODE_HEADER: &str = "SKU";
const NAME_HEADER: &str = "NOMBRE";
const CATEGORY_HEADER: &str = "CATEGORÍA";
const PRICE_HEADER: &str = "PRECIO (CLP)";
const STOCK_HEADER: &str = "STOCK";
const TOTAL_HEADER: &str = "TOTAL (CLP)";

const CODE_MAX: usize = 15;
const NAME_MAX: usize = 40;
const CATEGORY_MAX: usize = 20;
const PRICE_MAX: usize = 15;
const STOCK_MAX: usize = 8;
const TOTAL_MAX: usize = 15;

/// Chilean peso formatting: `1250000` → `$1.250.000`.
pub fn format_price(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    format!("${}", grouped)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnWidths {
    pub code: usize,
    pub name: usize,
    pub category: usize,
    pub price: usize,
    pub stock: usize,
    pub total: usize,
}

impl ColumnWidths {
    pub fn compute(products: &[Product]) -> Self {
        let mut widths = Self {
            code: CODE_HEADER.width(),
            name: NAME_HEADER.width(),
            category: CATEGORY_HEADER.width(),
            price: PRICE_HEADER.width(),
            stock: STOCK_HEADER.width(),
            total: TOTAL_HEADER.width(),
        };

        for p in products {
            widths.code = widths.code.max(p.code.width());
            widths.name = widths.name.max(p.name.width());
            widths.category = widths.category.max(p.category.as_str().width());
            widths.price = widths.price.max(format_price(p.price).width());
            widths.stock = widths.stock.max(p.stock.to_string().width());
            widths.total = widths.total.max(format_price(p.stock_value()).width());
        }

        Self {
            code: widths.code.min(CODE_MAX),
            name: widths.name.min(NAME_MAX),
            category: widths.category.min(CATEGORY_MAX),
            price: widths.price.min(PRICE_MAX),
            stock: widths.stock.min(STOCK_MAX),
            total: widths.total.min(TOTAL_MAX),
        }
    }

    pub fn table_width(&self) -> usize {
        self.code
            + self.name
            + self.category
            + self.price
            + self.stock
            + self.total
            + SEPARATOR.len() * 5
    }
}

/// The inventory table. With a summary, a footer with totals follows.
pub fn render_table(products: &[Product], summary: Option<&Summary>) -> String {
    let w = ColumnWidths::compute(products);
    let width = w.table_width();
    let mut out = String::new();

    out.push_str(&format!("\n{}\n", THEME.rule.apply_to("=".repeat(width))));
    out.push_str(&format!(
        "{}\n",
        THEME.banner.apply_to(center("INVENTARIO", width))
    ));
    out.push_str(&format!("{}\n", THEME.rule.apply_to("=".repeat(width))));

    let header = [
        pad_right(CODE_HEADER, w.code),
        pad_right(NAME_HEADER, w.name),
        pad_right(CATEGORY_HEADER, w.category),
        pad_left(PRICE_HEADER, w.price),
        pad_left(STOCK_HEADER, w.stock),
        pad_left(TOTAL_HEADER, w.total),
    ]
    .join(SEPARATOR);
    out.push_str(&format!("{}\n", THEME.header.apply_to(header)));
    out.push_str(&format!("{}\n", THEME.menu.apply_to("-".repeat(width))));

    for p in products {
        let row = [
            pad_right(&truncate_to_width(&p.code, w.code), w.code),
            pad_right(&truncate_to_width(&p.name, w.name), w.name),
            pad_right(&truncate_to_width(p.category.as_str(), w.category), w.category),
            pad_left(&format_price(p.price), w.price),
            pad_left(&p.stock.to_string(), w.stock),
            pad_left(&format_price(p.stock_value()), w.total),
        ]
        .join(SEPARATOR);
        out.push_str(&row);
        out.push('\n');
    }

    out.push_str(&format!("{}\n", THEME.menu.apply_to("=".repeat(width))));

    if let Some(summary) = summary {
        let footer = format!(
            "{}{}",
            pad_right("VALOR TOTAL DEL INVENTARIO:", width.saturating_sub(w.total)),
            pad_left(&format_price(summary.total_value), w.total)
        );
        out.push_str(&format!("{}\n", THEME.total.apply_to(footer)));
        out.push_str(&format!("{}\n", THEME.menu.apply_to("=".repeat(width))));
        out.push_str(&format!(
            "\n{}\n\n",
            THEME.stats.apply_to(format!(
                "Total de productos: {} | Productos sin stock: {}",
                summary.product_count, summary.out_of_stock
            ))
        ));
    }

    out
}

/// Which fields a product card shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardDetail {
    Full,
    Stock,
}

pub fn render_product_card(title: &str, product: &Product, detail: CardDetail) -> String {
    format!(
        "\n{}\n{}",
        THEME.menu.apply_to(title),
        render_product_details(product, detail)
    )
}

/// The indented field lines of a card, without a title.
pub fn render_product_details(product: &Product, detail: CardDetail) -> String {
    let mut out = format!("  SKU: {}\n", product.code);
    out.push_str(&format!("  Nombre: {}\n", product.name));
    match detail {
        CardDetail::Full => {
            out.push_str(&format!("  Categoría: {}\n", product.category));
            out.push_str(&format!("  Precio: {}\n", format_price(product.price)));
            out.push_str(&format!("  Stock: {} unidades\n", product.stock));
        }
        CardDetail::Stock => {
            out.push_str(&format!("  Stock actual: {} unidades\n", product.stock));
        }
    }
    out
}

pub fn render_banner(title: &str) -> String {
    format!(
        "\n{}\n{}\n{}\n",
        THEME.rule.apply_to("=".repeat(BANNER_WIDTH)),
        THEME.section.apply_to(center(title, BANNER_WIDTH)),
        THEME.rule.apply_to("=".repeat(BANNER_WIDTH))
    )
}

pub fn render_title() -> String {
    format!(
        "{}\n{}\n{}\n",
        THEME.rule.apply_to("=".repeat(BANNER_WIDTH)),
        THEME
            .banner
            .apply_to(center("GESTIÓN DE INVENTARIO • STOCKROOM", BANNER_WIDTH)),
        THEME.rule.apply_to("=".repeat(BANNER_WIDTH))
    )
}

pub const MENU_OPTIONS: [&str; 6] = [
    "Ver Inventario",
    "Registrar Producto",
    "Actualizar Stock",
    "Eliminar Producto",
    "Guardar Inventario",
    "Salir",
];

pub fn render_menu() -> String {
    let mut out = format!("\n{}\n", THEME.rule.apply_to("=".repeat(BANNER_WIDTH)));
    out.push_str(&format!("{}\n", THEME.section.apply_to("    Menú de Opciones")));
    out.push_str(&format!("{}\n", THEME.menu.apply_to("-".repeat(24))));
    for (i, option) in MENU_OPTIONS.iter().enumerate() {
        out.push_str(&format!(
            "{}\n",
            THEME.menu.apply_to(format!("  {}. {}", i + 1, option))
        ));
    }
    out.push_str(&format!(
        "{}\n\n",
        THEME.rule.apply_to("=".repeat(BANNER_WIDTH))
    ));
    out
}

fn center(text: &str, width: usize) -> String {
    let total = width.saturating_sub(text.width());
    let left = total / 2;
    format!(
        "{}{}{}",
        " ".repeat(left),
        text,
        " ".repeat(total - left)
    )
}

fn pad_right(text: &str, width: usize) -> String {
    format!("{}{}", text, " ".repeat(width.saturating_sub(text.width())))
}

fn pad_left(text: &str, width: usize) -> String {
    format!("{}{}", " ".repeat(width.saturating_sub(text.width())), text)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom::model::Category;

    fn product(code: &str, name: &str, price: u64, stock: u64) -> Product {
        Product {
            code: code.into(),
            name: name.into(),
            category: Category::Peripherals,
            price,
            stock,
        }
    }

    #[test]
    fn formats_prices_with_dots() {
        assert_eq!(format_price(0), "$0");
        assert_eq!(format_price(999), "$999");
        assert_eq!(format_price(1000), "$1.000");
        assert_eq!(format_price(1_250_000), "$1.250.000");
    }

    #[test]
    fn widths_start_at_headers() {
        let w = ColumnWidths::compute(&[product("A1", "MOUSE", 5, 1)]);
        assert_eq!(w.code, 3);
        assert_eq!(w.name, 6);
        assert_eq!(w.category, "CATEGORÍA".width());
        assert_eq!(w.price, 12);
    }

    #[test]
    fn widths_are_capped() {
        let long_name = "X".repeat(80);
        let long_code = "C".repeat(30);
        let w = ColumnWidths::compute(&[product(&long_code, &long_name, 5, 1)]);
        assert_eq!(w.name, 40);
        assert_eq!(w.code, 15);
    }

    #[test]
    fn truncates_with_ellipsis() {
        assert_eq!(truncate_to_width("ABCDEFG", 4), "ABC…");
        assert_eq!(truncate_to_width("ABC", 4), "ABC");
    }

    #[test]
    fn table_shows_rows_and_totals() {
        let products = vec![
            product("A1", "MOUSE", 5000, 10),
            product("A2", "MOUSE PAD", 2000, 0),
        ];
        let summary = Summary {
            product_count: 2,
            total_value: 50_000,
            out_of_stock: 1,
        };
        let rendered = render_table(&products, Some(&summary));
        let out = console::strip_ansi_codes(&rendered).to_string();

        assert!(out.contains("MOUSE PAD"));
        assert!(out.contains("$50.000"));
        assert!(out.contains("VALOR TOTAL DEL INVENTARIO:"));
        assert!(out.contains("Total de productos: 2 | Productos sin stock: 1"));
    }

    #[test]
    fn rows_have_equal_width() {
        let products = vec![
            product("A1", "MOUSE", 5000, 10),
            product("B22", "TECLADO Ñ", 100, 3),
        ];
        let out = console::strip_ansi_codes(&render_table(&products, None)).to_string();
        let rows: Vec<&str> = out.lines().filter(|l| l.contains(" | ")).collect();

        assert_eq!(rows.len(), 3);
        let width = rows[0].width();
        assert!(rows.iter().all(|r| r.width() == width));
    }

    #[test]
    fn stock_card_shows_current_stock_only() {
        let out = console::strip_ansi_codes(&render_product_card(
            "Producto seleccionado:",
            &product("A1", "MOUSE", 5000, 10),
            CardDetail::Stock,
        ))
        .to_string();
        assert!(out.contains("Stock actual: 10 unidades"));
        assert!(!out.contains("Precio"));
    }
}
