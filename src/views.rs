use forecast::ForecastResult;

/// Minimal HTML escaping for values echoed back to the client.
fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders the landing page.
///
/// The same page serves `GET /`, the post-submission view with a forecast
/// table, and the error state with a banner.
pub fn render_index(forecast: Option<&ForecastResult>, error: Option<&str>) -> String {
    let banner = match error {
        Some(message) => format!(r#"<p class="error">{}</p>"#, escape_html(message)),
        None => String::new(),
    };

    let forecast_section = match forecast {
        Some(result) => {
            let rows: String = result
                .points
                .iter()
                .map(|point| {
                    format!(
                        "<tr><td>{}</td><td>{}</td></tr>\n",
                        point.date, point.predicted_sales
                    )
                })
                .collect();
            format!(
                "<h2>Forecast for store {}</h2>\n<table>\n<tr><th>Date</th><th>Predicted sales</th></tr>\n{rows}</table>",
                result.store_number
            )
        }
        None => "<p>No forecast yet. Submit a store number and a start date.</p>".to_string(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<title>Storecast</title>
<style>
body {{ font-family: sans-serif; max-width: 720px; margin: 40px auto; }}
.error {{ color: #b00020; }}
table {{ border-collapse: collapse; margin-top: 16px; }}
th, td {{ border: 1px solid #ccc; padding: 4px 12px; text-align: right; }}
</style>
</head>
<body>
<h1>Store sales forecast</h1>
{banner}
<form action="/forecast_web" method="post">
<label for="store_number">Store number</label>
<input type="text" id="store_number" name="store_number">
<label for="forecast_start_date">Forecast start date</label>
<input type="date" id="forecast_start_date" name="forecast_start_date">
<button type="submit">Forecast</button>
</form>
<section id="forecast">
{forecast_section}
</section>
</body>
</html>"#
    )
}
