//! # Validation Helpers
//!
//! Line-oriented prompts that keep asking until the answer is valid.
//!
//! Bad input (text that does not parse, numbers out of range, unknown menu
//! positions) is reported on the output and asked again. It never leaves
//! this module as an error. The only errors are:
//!
//! - [`InventoryError::Interrupted`] when the input stream ends, which is how
//!   a user quits mid-prompt.
//! - [`InventoryError::Terminal`] when the terminal itself fails.
//!
//! [`Prompter`] is generic over its reader and writer so the same code runs
//! on stdin/stdout and on in-memory buffers in tests.

use crate::error::{InventoryError, Result};
use crate::model::{Category, Product};
use crate::search::{Confirmer, Selection, Selector};
use console::Style;
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Styles applied to prompt labels and error lines.
#[derive(Debug, Clone, Default)]
pub struct PromptStyles {
    pub label: Style,
    pub heading: Style,
    pub error: Style,
    pub question: Style,
}

pub struct Prompter<R, W> {
    input: R,
    output: W,
    styles: PromptStyles,
}

impl Prompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            styles: PromptStyles::default(),
        }
    }

    pub fn with_styles(mut self, styles: PromptStyles) -> Self {
        self.styles = styles;
        self
    }

    /// Writes `label` and reads one line, without the trailing newline.
    pub fn read_line(&mut self, label: &str) -> Result<String> {
        let label = self.styles.label.apply_to(label).to_string();
        self.ask(&label)
    }

    /// Asks for a number until one parses and is positive, or non-negative
    /// when `allow_zero` is set.
    pub fn number<T>(&mut self, label: &str, allow_zero: bool) -> Result<T>
    where
        T: FromStr + PartialOrd + Default + Display,
    {
        self.read_number(label, allow_zero, None)
    }

    /// Like [`Prompter::number`], but values above `max` are asked again too.
    pub fn number_at_most<T>(&mut self, label: &str, allow_zero: bool, max: T) -> Result<T>
    where
        T: FromStr + PartialOrd + Default + Display,
    {
        self.read_number(label, allow_zero, Some(max))
    }

    fn read_number<T>(&mut self, label: &str, allow_zero: bool, max: Option<T>) -> Result<T>
    where
        T: FromStr + PartialOrd + Default + Display,
    {
        let zero = T::default();
        loop {
            let answer = self.read_line(label)?;
            let value = match answer.trim().parse::<T>() {
                Ok(value) => value,
                Err(_) => {
                    self.error("Error: Debe ingresar un número válido.")?;
                    continue;
                }
            };

            if allow_zero && value < zero {
                self.error("Error: El valor debe ser mayor o igual a 0.")?;
                continue;
            }
            if !allow_zero && value <= zero {
                self.error("Error: El valor debe ser mayor a 0.")?;
                continue;
            }
            match &max {
                Some(max) if value > *max => {
                    self.error(format!("Error: El valor no puede superar {}.", max))?;
                }
                _ => return Ok(value),
            }
        }
    }

    /// Asks for a 1-based position in [`Category::ALL`].
    pub fn category(&mut self) -> Result<Category> {
        self.heading("Seleccione una categoría:")?;
        for (i, category) in Category::ALL.iter().enumerate() {
            self.line(format!("  {}. {}", i + 1, category))?;
        }

        let count = Category::ALL.len();
        loop {
            let answer = self.read_line(&format!("Opción (1-{}): ", count))?;
            match answer.trim().parse::<usize>() {
                Ok(position) => match Category::from_position(position) {
                    Some(category) => return Ok(category),
                    None => self.error(format!(
                        "Error: Opción inválida. Seleccione entre 1 y {}.",
                        count
                    ))?,
                },
                Err(_) => self.error("Error: Debe ingresar un número válido.")?,
            }
        }
    }

    fn ask(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{}", label).map_err(InventoryError::Terminal)?;
        self.output.flush().map_err(InventoryError::Terminal)?;

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => Err(InventoryError::Interrupted),
            Ok(_) => Ok(line.trim_end_matches(['\n', '\r']).to_string()),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => Err(InventoryError::Interrupted),
            Err(e) => Err(InventoryError::Terminal(e)),
        }
    }

    fn line(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.output, "{}", text).map_err(InventoryError::Terminal)
    }

    fn heading(&mut self, text: &str) -> Result<()> {
        let styled = self.styles.heading.apply_to(text).to_string();
        self.line(format!("\n{}", styled))
    }

    fn error(&mut self, text: impl Display) -> Result<()> {
        let styled = self.styles.error.apply_to(text.to_string()).to_string();
        self.line(styled)
    }
}

impl<R: BufRead, W: Write> Confirmer for Prompter<R, W> {
    fn confirm(&mut self, question: &str) -> Result<bool> {
        let label = self
            .styles
            .question
            .apply_to(format!("{} (S/N): ", question))
            .to_string();
        loop {
            match self.ask(&label)?.trim().to_uppercase().as_str() {
                "S" => return Ok(true),
                "N" => return Ok(false),
                _ => self.error("Error: Responda 'S' para Sí o 'N' para No.")?,
            }
        }
    }
}

impl<R: BufRead, W: Write> Selector for Prompter<R, W> {
    fn select(&mut self, title: &str, candidates: &[&Product]) -> Result<Selection> {
        self.heading(&format!("{}:", title))?;
        for (i, product) in candidates.iter().enumerate() {
            self.line(format!("  {}. {} - SKU: {}", i + 1, product.name, product.code))?;
        }
        self.line("  0. Cancelar")?;

        loop {
            let label = format!("Seleccione una opción (0-{}): ", candidates.len());
            match self.read_line(&label)?.trim().parse::<usize>() {
                Ok(0) => return Ok(Selection::Cancelled),
                Ok(n) if n <= candidates.len() => return Ok(Selection::Chosen(n - 1)),
                Ok(_) => self.error("Error: Opción inválida.")?,
                Err(_) => self.error("Error: Debe ingresar un número válido.")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(p: &Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.output.clone()).unwrap()
    }

    #[test]
    fn number_reprompts_until_valid() {
        let mut p = prompter("abc\n-3\n0\n12\n");
        let value: i64 = p.number("Precio: ", false).unwrap();

        assert_eq!(value, 12);
        let out = output(&p);
        assert!(out.contains("Debe ingresar un número válido"));
        assert!(out.contains("El valor debe ser mayor a 0"));
        assert_eq!(out.matches("Precio: ").count(), 4);
    }

    #[test]
    fn number_allows_zero_when_asked() {
        let mut p = prompter("-1\n 0 \n");
        let value: i64 = p.number("Stock: ", true).unwrap();

        assert_eq!(value, 0);
        assert!(output(&p).contains("mayor o igual a 0"));
    }

    #[test]
    fn number_at_most_reprompts_above_the_bound() {
        let mut p = prompter("2000000000\n1000\n500\n");
        let value: i64 = p.number_at_most("Precio: ", false, 999).unwrap();

        assert_eq!(value, 500);
        let out = output(&p);
        assert_eq!(out.matches("El valor no puede superar 999.").count(), 2);
        assert_eq!(out.matches("Precio: ").count(), 3);
    }

    #[test]
    fn number_at_most_accepts_the_bound_itself() {
        let mut p = prompter("0\n50\n");
        let value: u64 = p.number_at_most("Stock: ", true, 50).unwrap();
        assert_eq!(value, 0);

        let mut p = prompter("50\n");
        let value: u64 = p.number_at_most("Stock: ", true, 50).unwrap();
        assert_eq!(value, 50);
    }

    #[test]
    fn number_works_for_floats() {
        let mut p = prompter("1,5\n2.5\n");
        let value: f64 = p.number("Valor: ", false).unwrap();
        assert_eq!(value, 2.5);
    }

    #[test]
    fn end_of_input_is_an_interrupt() {
        let mut p = prompter("x\n");
        let result: Result<i64> = p.number("Stock: ", true);
        assert!(matches!(result, Err(InventoryError::Interrupted)));
    }

    #[test]
    fn category_by_position() {
        let mut p = prompter("0\nfoo\n2\n");
        assert_eq!(p.category().unwrap(), Category::Peripherals);

        let out = output(&p);
        assert!(out.contains("1. LAPTOPS"));
        assert!(out.contains("3. ACCESORIOS"));
        assert!(out.contains("Seleccione entre 1 y 3"));
    }

    #[test]
    fn confirm_accepts_either_case() {
        let mut p = prompter("quizas\ns\n");
        assert!(p.confirm("¿Seguro?").unwrap());
        assert!(output(&p).contains("Responda 'S'"));

        let mut p = prompter("N\n");
        assert!(!p.confirm("¿Seguro?").unwrap());
    }

    #[test]
    fn select_lists_candidates_and_maps_to_zero_based() {
        let a = Product {
            code: "A1".into(),
            name: "MOUSE".into(),
            category: Category::Peripherals,
            price: 1,
            stock: 1,
        };
        let b = Product {
            code: "A2".into(),
            name: "MOUSE PAD".into(),
            ..a.clone()
        };

        let mut p = prompter("5\n2\n");
        assert_eq!(p.select("Resultados", &[&a, &b]).unwrap(), Selection::Chosen(1));
        let out = output(&p);
        assert!(out.contains("1. MOUSE - SKU: A1"));
        assert!(out.contains("0. Cancelar"));
        assert!(out.contains("Opción inválida"));

        let mut p = prompter("0\n");
        assert_eq!(p.select("Resultados", &[&a, &b]).unwrap(), Selection::Cancelled);
    }
}
