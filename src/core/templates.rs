use crate::core::{Row, RowTemplate, SearchResult};
use serde::{Deserialize, Serialize};

// 欄位直接字串串接，不做 HTML escape

/// Row for the beer table: name link, brewery link, edit and delete buttons.
#[derive(Debug, Clone, Copy, Default)]
pub struct BeerRowTemplate;

impl RowTemplate for BeerRowTemplate {
    fn render(&self, result: &SearchResult) -> Row {
        let brewery = result.brewery.as_deref().unwrap_or("");

        let mut html = String::from("<tr>");
        html += &format!(
            "<td><a href=\"/beers/show/{}\">{}</a></td>",
            result.id, result.name
        );
        html += &format!(
            "<td><a href=\"/breweries/show/{}\">To Brewery</a></td>",
            brewery
        );
        html += "<td>";
        html += &format!(
            "<a class=\"btn btn-small btn-warning\" href=\"/beers/edit/{}\">Edit</a>\n",
            result.id
        );
        html += &format!(
            "<a class=\"btn btn-small btn-danger\" href=\"/beers/delete/{}\">Delete</a>",
            result.id
        );
        html += "</td>";
        html += "</tr>";

        Row::new(result.id.clone(), html)
    }
}

/// Row for the brewery table: name link and a delete button.
///
/// Both links use the `/beers/...` routes; the server resolves any document
/// id on those paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct BreweryRowTemplate;

impl RowTemplate for BreweryRowTemplate {
    fn render(&self, result: &SearchResult) -> Row {
        let mut html = String::from("<tr>");
        html += &format!(
            "<td><a href=\"/beers/show/{}\">{}</a></td>",
            result.id, result.name
        );
        html += "<td>";
        html += &format!(
            "<a class=\"btn btn-small btn-danger\" href=\"/beers/delete/{}\">Delete</a>",
            result.id
        );
        html += "</td>";
        html += "</tr>";

        Row::new(result.id.clone(), html)
    }
}

/// Template picked by name from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    Beer,
    Brewery,
}

impl RowTemplate for TemplateKind {
    fn render(&self, result: &SearchResult) -> Row {
        match self {
            TemplateKind::Beer => BeerRowTemplate.render(result),
            TemplateKind::Brewery => BreweryRowTemplate.render(result),
        }
    }
}
