//! The numbered CRUD menu.

use std::io::{self, BufRead, Write};

use stockroom_core::message;
use stockroom_core::product::{NewProduct, Product, ProductChanges};
use stockroom_db::ProductGateway;

use crate::prompt::Prompter;

const MENU_WIDTH: usize = 40;
const TABLE_WIDTH: usize = 50;

/// What the menu loop does after handling a choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Menu-driven front end over any line reader and writer.
pub struct Console<R, W> {
    gateway: ProductGateway,
    prompt: Prompter<R, W>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(gateway: ProductGateway, input: R, output: W) -> Self {
        Self {
            gateway,
            prompt: Prompter::new(input, output),
        }
    }

    pub fn into_output(self) -> W {
        self.prompt.into_output()
    }

    /// Show the menu until the user picks Exit or input runs out.
    pub async fn run(&mut self) -> io::Result<()> {
        loop {
            match self.step().await {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                    tracing::debug!("Input closed, leaving console");
                    writeln!(self.out())?;
                    break;
                }
                Err(e) => return Err(e),
            }
        }
        writeln!(self.out(), "Exiting console. Goodbye!")?;
        self.out().flush()
    }

    fn out(&mut self) -> &mut W {
        self.prompt.output()
    }

    async fn step(&mut self) -> io::Result<Flow> {
        self.print_menu()?;
        let choice = self.prompt.line("Enter your choice (1-5): ")?;

        match choice.as_str() {
            "1" => self.handle_create().await?,
            "2" => self.handle_read().await?,
            "3" => self.handle_update().await?,
            "4" => self.handle_delete().await?,
            "5" => return Ok(Flow::Exit),
            _ => writeln!(
                self.out(),
                "\nInvalid choice. Please enter a number between 1 and 5.\n"
            )?,
        }
        Ok(Flow::Continue)
    }

    fn print_menu(&mut self) -> io::Result<()> {
        let rule = "=".repeat(MENU_WIDTH);
        let out = self.out();
        writeln!(out, "{rule}")?;
        writeln!(out, "{:^MENU_WIDTH$}", " STOCKROOM PRODUCTS CONSOLE ")?;
        writeln!(out, "{rule}")?;
        writeln!(out, "1. Create Product")?;
        writeln!(out, "2. Read Products")?;
        writeln!(out, "3. Update Product")?;
        writeln!(out, "4. Delete Product")?;
        writeln!(out, "5. Exit")?;
        writeln!(out, "{rule}")
    }

    async fn handle_create(&mut self) -> io::Result<()> {
        writeln!(self.out(), "\n--- CREATE PRODUCT ---")?;
        let id = self.prompt.int("Enter Product ID: ")?;
        let name = self.prompt.line("Enter Product Name: ")?;
        let quantity = self.prompt.int("Enter Quantity: ")?;
        let price = self.prompt.float("Enter Price: ")?;

        let result = match self
            .gateway
            .create(NewProduct::new(id, name, quantity, price))
            .await
        {
            Ok(product) => message::created(&product),
            Err(e) => message::failure(&e),
        };
        writeln!(self.out(), "\n{result}\n")
    }

    async fn handle_read(&mut self) -> io::Result<()> {
        writeln!(self.out(), "\n--- READ PRODUCTS ---")?;
        let mode = self.prompt.line("Read [A]ll or Read by [I]D? (A/I): ")?;

        match mode.to_ascii_uppercase().as_str() {
            "A" => self.read_all().await,
            "I" => self.read_one().await,
            _ => writeln!(self.out(), "\nInvalid option. Please enter A or I.\n"),
        }
    }

    async fn read_all(&mut self) -> io::Result<()> {
        let result = self.gateway.read_all().await;

        let rule = "=".repeat(TABLE_WIDTH);
        let out = self.out();
        writeln!(out, "\n{rule}")?;
        writeln!(out, "{:^TABLE_WIDTH$}", "PRODUCTS LIST (ALL)")?;
        writeln!(out, "{rule}")?;
        match result {
            Err(e) => writeln!(out, "{}", message::failure(&e))?,
            Ok(products) if products.is_empty() => writeln!(out, "No products found.")?,
            Ok(products) => {
                writeln!(out, "{:<5}{:<30}{:<5}{:>10}", "ID", "Name", "Qty", "Price")?;
                writeln!(out, "{}", "-".repeat(TABLE_WIDTH))?;
                for p in &products {
                    writeln!(out, "{:<5}{:<30}{:<5}{:>10.2}", p.id, p.name, p.quantity, p.price)?;
                }
            }
        }
        writeln!(out, "{rule}\n")
    }

    async fn read_one(&mut self) -> io::Result<()> {
        let id = self.prompt.int("Enter Product ID to read: ")?;
        match self.gateway.read_one(id).await {
            Ok(product) => print_details(self.out(), &product),
            Err(e) => writeln!(self.out(), "\n{}\n", message::failure(&e)),
        }
    }

    async fn handle_update(&mut self) -> io::Result<()> {
        writeln!(self.out(), "\n--- UPDATE PRODUCT ---")?;
        let id = self.prompt.int("Enter Product ID to update: ")?;
        writeln!(
            self.out(),
            "Enter new values (leave blank to skip updating a field):"
        )?;
        let quantity = self.prompt.optional_int("New Quantity: ")?;
        let price = self.prompt.optional_float("New Price: ")?;

        let result = match self
            .gateway
            .update(id, ProductChanges::new(quantity, price))
            .await
        {
            Ok(product) => message::updated(product.id),
            Err(e) => message::failure(&e),
        };
        writeln!(self.out(), "\n{result}\n")
    }

    async fn handle_delete(&mut self) -> io::Result<()> {
        writeln!(self.out(), "\n--- DELETE PRODUCT ---")?;
        let id = self.prompt.int("Enter Product ID to delete: ")?;

        let result = match self.gateway.delete(id).await {
            Ok(()) => message::deleted(id),
            Err(e) => message::failure(&e),
        };
        writeln!(self.out(), "\n{result}\n")
    }
}

fn print_details(out: &mut impl Write, product: &Product) -> io::Result<()> {
    writeln!(out, "\n--- Product Details (ID: {}) ---", product.id)?;
    writeln!(out, "Name: {}", product.name)?;
    writeln!(out, "Quantity: {}", product.quantity)?;
    writeln!(out, "Price: ${:.2}\n", product.price)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::sync::Arc;

    use stockroom_db::MemoryProductStore;

    use super::*;

    fn widget() -> Product {
        Product {
            id: 7,
            name: "Widget".into(),
            quantity: 3,
            price: 9.99,
        }
    }

    fn gateway(products: Vec<Product>) -> ProductGateway {
        ProductGateway::new(Arc::new(MemoryProductStore::with_products(products)))
    }

    /// Feed `input` to a console over `gateway` and return everything printed.
    async fn session(gateway: &ProductGateway, input: &str) -> String {
        let mut console = Console::new(
            gateway.clone(),
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
        );
        console.run().await.unwrap();
        String::from_utf8(console.into_output()).unwrap()
    }

    #[tokio::test]
    async fn create_then_read_by_id() {
        let gw = gateway(vec![]);
        let out = session(&gw, "1\n7\nWidget\n3\n9.99\n2\ni\n7\n5\n").await;

        assert!(out.contains("[SUCCESS] Product 7 ('Widget') inserted."));
        assert!(out.contains("--- Product Details (ID: 7) ---"));
        assert!(out.contains("Name: Widget"));
        assert!(out.contains("Price: $9.99"));
        assert!(out.ends_with("Exiting console. Goodbye!\n"));
        assert_eq!(gw.read_one(7).await.unwrap(), widget());
    }

    #[tokio::test]
    async fn create_reprompts_on_bad_numbers() {
        let gw = gateway(vec![]);
        let out = session(&gw, "1\nseven\n7\nWidget\n3.5\n3\nfree\n9.99\n5\n").await;

        assert!(out.contains("Invalid input. Please enter a whole number."));
        assert!(out.contains("Invalid input. Please enter a number (e.g., 45.99)."));
        assert_eq!(gw.read_one(7).await.unwrap(), widget());
    }

    #[tokio::test]
    async fn negative_price_reports_validation_failure() {
        let gw = gateway(vec![]);
        let out = session(&gw, "1\n5\nInvalid Price Item\n10\n-5.00\n5\n").await;

        assert!(out.contains("[VALIDATION FAILED] Price must be non-negative."));
        assert!(gw.read_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn blank_name_reports_validation_failure() {
        let gw = gateway(vec![]);
        let out = session(&gw, "1\n8\n\n1\n1.00\n5\n").await;

        assert!(out.contains("[VALIDATION FAILED] Name must not be empty."));
        assert!(gw.read_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn blank_update_field_is_left_unchanged() {
        let gw = gateway(vec![widget()]);
        let out = session(&gw, "3\n7\n\n12.50\n5\n").await;

        assert!(out.contains("[SUCCESS] Product 7 updated."));
        let product = gw.read_one(7).await.unwrap();
        assert_eq!(product.quantity, 3);
        assert_eq!(product.price, 12.5);
    }

    #[tokio::test]
    async fn all_blank_update_is_no_op() {
        let gw = gateway(vec![widget()]);
        let out = session(&gw, "3\n7\n\n\n5\n").await;

        assert!(out.contains("[INFO] No update values provided."));
        assert_eq!(gw.read_one(7).await.unwrap(), widget());
    }

    #[tokio::test]
    async fn read_all_prints_table_or_empty_notice() {
        let out = session(&gateway(vec![]), "2\nA\n5\n").await;
        assert!(out.contains("No products found."));

        let out = session(&gateway(vec![widget()]), "2\na\n5\n").await;
        assert!(out.contains("PRODUCTS LIST (ALL)"));
        assert!(out.contains(&format!("{:<5}{:<30}{:<5}{:>10}", 7, "Widget", 3, "9.99")));
    }

    #[tokio::test]
    async fn delete_missing_reports_not_found() {
        let gw = gateway(vec![widget()]);
        let out = session(&gw, "4\n8\n4\n7\n5\n").await;

        assert!(out.contains("[NOT FOUND] Product with ID 8 not found."));
        assert!(out.contains("[SUCCESS] Product 7 deleted."));
        assert!(gw.read_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn invalid_choice_loops_back_to_menu() {
        let out = session(&gateway(vec![]), "9\n5\n").await;

        assert!(out.contains("Invalid choice. Please enter a number between 1 and 5."));
        assert_eq!(out.matches("Enter your choice (1-5): ").count(), 2);
    }

    #[tokio::test]
    async fn end_of_input_exits_cleanly() {
        let gw = gateway(vec![]);
        let out = session(&gw, "1\n7\nWidget\n").await;

        assert!(out.ends_with("Exiting console. Goodbye!\n"));
        assert!(gw.read_all().await.unwrap().is_empty());
    }
}
