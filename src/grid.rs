use crate::errors::GridError;
use crate::models::{Article, ArticleDraft, RowView};
use std::str::FromStr;
use tracing::{info, warn};

const TAG_SEPARATOR: &str = ", ";
const LINE_BREAK: &str = "<br>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Url,
    Author,
    Title,
    Notes,
    Tags,
}

impl FromStr for Column {
    type Err = GridError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "url" => Ok(Self::Url),
            "author" => Ok(Self::Author),
            "title" => Ok(Self::Title),
            "notes" => Ok(Self::Notes),
            "tags" => Ok(Self::Tags),
            other => Err(GridError::UnknownColumn(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleRow {
    pub id: u64,
    pub article: Article,
}

impl ArticleRow {
    pub fn view(&self) -> RowView {
        RowView {
            id: self.id,
            url: self.article.url.clone(),
            author: self.article.author.clone(),
            title: self.article.title.clone(),
            notes_html: escape_notes(&self.article.notes),
            tags: join_tags(&self.article.tags),
        }
    }

    fn display(&self, column: Column) -> String {
        match column {
            Column::Url => self.article.url.clone(),
            Column::Author => self.article.author.clone(),
            Column::Title => self.article.title.clone(),
            Column::Notes => escape_notes(&self.article.notes),
            Column::Tags => join_tags(&self.article.tags),
        }
    }
}

/// The saved-article rows in display order. Row ids are never reused.
#[derive(Debug, Default)]
pub struct ArticleGrid {
    rows: Vec<ArticleRow>,
    next_id: u64,
    editing: Option<(u64, Column)>,
}

impl ArticleGrid {
    pub fn from_articles(articles: Vec<Article>) -> Self {
        let mut grid = Self::default();
        for article in articles {
            grid.push(article);
        }
        grid
    }

    pub fn rows(&self) -> &[ArticleRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn editing(&self) -> Option<(u64, Column)> {
        self.editing
    }

    pub fn add_row(&mut self, draft: ArticleDraft) -> &ArticleRow {
        let article = Article {
            url: draft.url.unwrap_or_default(),
            author: draft.author.unwrap_or_default(),
            title: draft.title.unwrap_or_default(),
            notes: draft.notes.unwrap_or_default(),
            tags: draft.tags.unwrap_or_default(),
        };
        let row = self.push(article);
        info!(id = row.id, "row added");
        row
    }

    pub fn delete_row(&mut self, id: u64) -> Result<Article, GridError> {
        let index = self.position(id)?;
        let row = self.rows.remove(index);
        if matches!(self.editing, Some((editing, _)) if editing == id) {
            self.editing = None;
        }
        info!(id, remaining = self.rows.len(), "row deleted");
        Ok(row.article)
    }

    /// Marks the cell as being edited and returns its editable text.
    pub fn begin_edit(&mut self, id: u64, column: Column) -> Result<String, GridError> {
        let row = &self.rows[self.position(id)?];
        let text = match column {
            Column::Url => row.article.url.trim().to_string(),
            Column::Author => row.article.author.trim().to_string(),
            Column::Title => row.article.title.trim().to_string(),
            Column::Notes => row.article.notes.clone(),
            Column::Tags => join_tags(&row.article.tags),
        };
        if let Some((previous, previous_column)) = self.editing.replace((id, column)) {
            if (previous, previous_column) != (id, column) {
                warn!(previous, ?previous_column, "edit replaced before commit");
            }
        }
        Ok(text)
    }

    /// Writes an edited value back and returns the cell's new display text.
    pub fn commit_edit(&mut self, id: u64, column: Column, value: &str) -> Result<String, GridError> {
        let index = self.position(id)?;
        let row = &mut self.rows[index];
        match column {
            Column::Tags => row.article.tags = split_tags(value),
            Column::Notes => row.article.notes = value.to_string(),
            Column::Url => commit_trimmed(&mut row.article.url, value),
            Column::Author => commit_trimmed(&mut row.article.author, value),
            Column::Title => commit_trimmed(&mut row.article.title, value),
        }
        let display = row.display(column);
        if self.editing == Some((id, column)) {
            self.editing = None;
        }
        Ok(display)
    }

    pub fn row(&self, id: u64) -> Result<&ArticleRow, GridError> {
        Ok(&self.rows[self.position(id)?])
    }

    pub fn export(&self) -> Vec<Article> {
        self.rows.iter().map(|row| row.article.clone()).collect()
    }

    /// Pretty JSON with two-space indentation.
    pub fn export_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.export())
    }

    fn push(&mut self, article: Article) -> &ArticleRow {
        let id = self.next_id;
        self.next_id += 1;
        self.rows.push(ArticleRow { id, article });
        &self.rows[self.rows.len() - 1]
    }

    fn position(&self, id: u64) -> Result<usize, GridError> {
        self.rows
            .iter()
            .position(|row| row.id == id)
            .ok_or(GridError::RowNotFound(id))
    }
}

fn commit_trimmed(field: &mut String, value: &str) {
    let trimmed = value.trim();
    if !trimmed.is_empty() {
        *field = trimmed.to_string();
    }
}

pub fn split_tags(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn join_tags(tags: &[String]) -> String {
    tags.join(TAG_SEPARATOR)
}

/// HTML-escapes notes and turns newlines into `<br>`.
pub fn escape_notes(notes: &str) -> String {
    let mut out = String::with_capacity(notes.len());
    for ch in notes.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '\n' => out.push_str(LINE_BREAK),
            _ => out.push(ch),
        }
    }
    out
}
