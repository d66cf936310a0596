use crate::models::Product;
use crate::page::{Element, ElementId, Page, ADD_TO_CART_CLASS, CART_COUNT_CLASS};

pub fn storefront_page(products: &[Product]) -> Page {
    let mut page = Page::new();

    let header = page.append(None, Element::new("header"));
    page.append(Some(header), Element::new("h1").with_text("Books"));
    let badge = page.append(Some(header), Element::new("a").with_class("cart-link"));
    page.append(Some(badge), Element::new("span").with_text("Cart"));
    page.append(
        Some(badge),
        Element::new("span").with_class(CART_COUNT_CLASS).with_text("0"),
    );

    let list = page.append(None, Element::new("main").with_class("products"));
    for product in products {
        let card = page.append(Some(list), Element::new("article").with_class("product"));
        page.append(
            Some(card),
            Element::new("h2").with_class("title").with_text(product.title.as_str()),
        );
        if let Some(price) = &product.price {
            page.append(
                Some(card),
                Element::new("p").with_class("price").with_text(price.as_str()),
            );
        }
        page.append(
            Some(card),
            Element::new("button")
                .with_class(ADD_TO_CART_CLASS)
                .with_data("upc", &product.upc)
                .with_text("Add to cart"),
        );
    }

    page
}

pub fn render_page(page: &Page) -> String {
    let mut body = String::new();
    for id in page.children(None) {
        render_element(page, id, 2, &mut body);
    }
    INDEX_HTML.replace("{{BODY}}", body.trim_end())
}

fn render_element(page: &Page, id: ElementId, depth: usize, out: &mut String) {
    let Some(element) = page.element(id) else {
        return;
    };
    let indent = "  ".repeat(depth);

    out.push_str(&indent);
    out.push('<');
    out.push_str(&element.tag);
    if let Some(dom_id) = &element.id {
        out.push_str(&format!(" id=\"{}\"", escape(dom_id)));
    }
    if !element.classes.is_empty() {
        let classes: Vec<&str> = element.classes.iter().map(String::as_str).collect();
        out.push_str(&format!(" class=\"{}\"", escape(&classes.join(" "))));
    }
    for (key, value) in &element.data {
        out.push_str(&format!(" data-{}=\"{}\"", escape(key), escape(value)));
    }
    if element.disabled {
        out.push_str(" disabled");
    }
    out.push('>');

    let children = page.children(Some(id));
    if children.is_empty() {
        out.push_str(&escape(&element.text));
    } else {
        out.push('\n');
        if !element.text.is_empty() {
            out.push_str(&format!("{indent}  {}\n", escape(&element.text)));
        }
        for child in children {
            render_element(page, child, depth + 1, out);
        }
        out.push_str(&indent);
    }

    out.push_str(&format!("</{}>\n", element.tag));
}

fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Books</title>
  <style>
    :root {
      --bg: #f8f3e6;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      background: var(--bg);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      padding: 32px 18px 48px;
    }

    header {
      display: flex;
      align-items: center;
      justify-content: space-between;
      margin-bottom: 24px;
    }

    .cart-link {
      display: inline-flex;
      gap: 8px;
      font-weight: 600;
    }

    .cart-count {
      background: var(--accent);
      color: white;
      border-radius: 999px;
      padding: 0 10px;
    }

    .products {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
      gap: 16px;
    }

    .product {
      background: var(--card);
      border-radius: 18px;
      padding: 18px;
      box-shadow: var(--shadow);
      display: grid;
      gap: 8px;
    }

    .add-to-cart {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 16px;
      background: var(--accent-2);
      color: white;
      font-weight: 600;
      cursor: pointer;
    }

    .add-to-cart[disabled] {
      opacity: 0.5;
      cursor: progress;
    }

    .cart-message {
      position: fixed;
      bottom: 24px;
      right: 24px;
      padding: 14px 20px;
      border-radius: 14px;
      background: var(--accent-2);
      color: white;
      opacity: 0;
      transition: opacity 200ms ease;
    }

    .cart-message.show {
      opacity: 1;
    }
  </style>
</head>
<body>
{{BODY}}
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::VISIBLE_CLASS;

    fn catalog() -> Vec<Product> {
        vec![
            Product {
                upc: "a897fe39b1053632".to_string(),
                title: "A Light in the Attic".to_string(),
                price: Some("51.77".to_string()),
            },
            Product {
                upc: "90fa61229261140a".to_string(),
                title: "Tipping the Velvet".to_string(),
                price: None,
            },
        ]
    }

    #[test]
    fn storefront_honors_the_dom_contract() {
        let page = storefront_page(&catalog());
        assert_eq!(page.query_class(CART_COUNT_CLASS).len(), 1);
        assert_eq!(page.query_class(ADD_TO_CART_CLASS).len(), 2);
        assert!(page.find_add_button("90fa61229261140a").is_some());
    }

    #[test]
    fn rendered_page_carries_markers_and_escapes_text() {
        let mut products = catalog();
        products[0].title = "Tom & <Jerry>".to_string();
        let html = render_page(&storefront_page(&products));

        assert!(html.contains(r#"<span class="cart-count">0</span>"#));
        assert!(html.contains(r#"data-upc="a897fe39b1053632""#));
        assert!(html.contains("Tom &amp; &lt;Jerry&gt;"));
        assert!(!html.contains("{{BODY}}"));
    }

    #[test]
    fn rendered_page_reflects_widget_state() {
        let mut page = storefront_page(&catalog());
        let button = page.find_add_button("a897fe39b1053632").unwrap();
        page.set_disabled(button, true);
        let message = page.ensure_message_element();
        page.set_text(message, "Added");
        page.add_class(message, VISIBLE_CLASS);

        let html = render_page(&page);
        assert!(html.contains(r#"data-upc="a897fe39b1053632" disabled>"#));
        assert!(html.contains(r#"<div id="cart-message" class="cart-message show">Added</div>"#));
    }
}
