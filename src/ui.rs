pub fn render_dashboard() -> &'static str {
    DASHBOARD_HTML
}

pub fn render_articles() -> &'static str {
    ARTICLES_HTML
}

const DASHBOARD_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Fitness Dashboard</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
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
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(980px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    h2 {
      margin: 0;
      font-size: 1.4rem;
    }

    nav a {
      color: var(--accent-2);
      font-weight: 600;
    }

    .range {
      display: flex;
      flex-wrap: wrap;
      align-items: end;
      gap: 12px;
    }

    .range label {
      display: grid;
      gap: 4px;
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    input[type="date"] {
      font: inherit;
      padding: 8px 10px;
      border-radius: 10px;
      border: 1px solid rgba(47, 72, 88, 0.2);
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 10px 18px;
      font-size: 0.95rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
    }

    button:disabled {
      opacity: 0.5;
      cursor: default;
    }

    .status {
      min-height: 1.2em;
      font-size: 0.95rem;
    }

    .status[data-type="error"] {
      color: #b3261e;
    }

    .chart-wrap {
      background: white;
      border-radius: 18px;
      padding: 12px;
      border: 1px solid rgba(47, 72, 88, 0.08);
    }

    svg {
      width: 100%;
      height: auto;
    }

    .chart-grid {
      stroke: rgba(47, 72, 88, 0.1);
    }

    .chart-line {
      fill: none;
      stroke: #8884d8;
      stroke-width: 2.5;
    }

    .chart-point {
      fill: #8884d8;
    }

    .chart-label {
      fill: #8b857d;
      font-size: 11px;
    }

    table {
      width: 100%;
      border-collapse: collapse;
      background: white;
      border-radius: 18px;
      overflow: hidden;
    }

    th, td {
      text-align: left;
      padding: 8px 14px;
    }

    tbody tr:nth-child(odd) {
      background: rgba(47, 72, 88, 0.05);
    }

    .pager {
      display: flex;
      align-items: center;
      gap: 12px;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>MyFitnessPal Dashboard</h1>
      <nav><a href="/articles">Saved articles</a></nav>
    </header>

    <section>
      <h2>Weight Measurements</h2>
      <div class="range">
        <label>Start <input type="date" id="start" /></label>
        <label>End <input type="date" id="end" /></label>
        <button id="update">Update</button>
      </div>
      <p class="status" id="status"></p>
      <div class="chart-wrap">
        <svg id="chart" viewBox="0 0 800 400" role="img" aria-label="Weight chart"></svg>
      </div>
    </section>

    <section>
      <h2>Nutrition Summary</h2>
      <p class="status" id="nutrition-status"></p>
      <table>
        <thead>
          <tr>
            <th>Date</th>
            <th>Meal</th>
            <th>Calories</th>
            <th>Fat (g)</th>
            <th>Carbohydrates (g)</th>
            <th>Protein (g)</th>
          </tr>
        </thead>
        <tbody id="nutrition"></tbody>
      </table>
      <div class="pager">
        <button id="prev">Previous</button>
        <span id="page-label"></span>
        <button id="next">Next</button>
      </div>
    </section>
  </main>

  <script>
    const startEl = document.getElementById('start');
    const endEl = document.getElementById('end');
    const statusEl = document.getElementById('status');
    const chartEl = document.getElementById('chart');
    const nutritionEl = document.getElementById('nutrition');
    const nutritionStatusEl = document.getElementById('nutrition-status');
    const pageLabelEl = document.getElementById('page-label');
    const prevEl = document.getElementById('prev');
    const nextEl = document.getElementById('next');

    let nutritionPage = null;

    const setStatus = (el, message, type) => {
      el.textContent = message;
      el.dataset.type = type || '';
    };

    const escapeText = (value) => String(value ?? '')
      .replace(/&/g, '&amp;')
      .replace(/</g, '&lt;')
      .replace(/>/g, '&gt;');

    const renderChart = (view) => {
      const width = 800;
      const height = 400;
      const paddingX = 56;
      const paddingY = 40;
      const top = 20;
      const points = view.points.filter((point) => typeof point.weight === 'number');

      if (!points.length) {
        chartEl.innerHTML = '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No data</text>';
        return;
      }

      let min = view.domain ? view.domain.floor : Math.min(...points.map((p) => p.weight));
      let max = view.domain ? view.domain.ceiling : Math.max(...points.map((p) => p.weight));
      if (min === max) {
        min -= 5;
        max += 5;
      }

      const range = max - min;
      const xStep = points.length > 1 ? (width - paddingX * 2) / (points.length - 1) : 0;
      const scaleY = (height - top - paddingY) / range;
      const x = (index) => paddingX + index * xStep;
      const y = (value) => height - paddingY - (value - min) * scaleY;

      const path = points
        .map((point, index) => `${index === 0 ? 'M' : 'L'} ${x(index).toFixed(2)} ${y(point.weight).toFixed(2)}`)
        .join(' ');

      const ticks = Math.max(1, Math.round(range / 5));
      let grid = '';
      for (let i = 0; i <= ticks; i += 1) {
        const value = min + (range * i) / ticks;
        const yPos = y(value);
        grid += `<line class="chart-grid" stroke-dasharray="3 3" x1="${paddingX}" y1="${yPos}" x2="${width - paddingX}" y2="${yPos}" />`;
        grid += `<text class="chart-label" x="${paddingX - 10}" y="${yPos + 4}" text-anchor="end">${Math.round(value)}</text>`;
      }

      const labelEvery = Math.max(1, Math.ceil(points.length / 10));
      const xLabels = points
        .map((point, index) => {
          if (index % labelEvery !== 0) {
            return '';
          }
          return `<text class="chart-label" x="${x(index)}" y="${height - paddingY + 18}" text-anchor="middle">${point.date}</text>`;
        })
        .join('');

      const circles = points
        .map((point, index) => `<circle class="chart-point" cx="${x(index)}" cy="${y(point.weight)}" r="3"><title>${point.date}: ${point.weight}</title></circle>`)
        .join('');

      chartEl.innerHTML = `${grid}<path class="chart-line" d="${path}" />${circles}${xLabels}`;
    };

    const renderNutrition = (page) => {
      nutritionPage = page;
      nutritionEl.innerHTML = page.rows
        .map((row) => `<tr>
            <td>${escapeText(row.date)}</td>
            <td>${escapeText(row.meal)}</td>
            <td>${escapeText(row.calories)}</td>
            <td>${escapeText(row.fat)}</td>
            <td>${escapeText(row.carbohydrates)}</td>
            <td>${escapeText(row.protein)}</td>
          </tr>`)
        .join('');
      const pages = Math.max(1, Math.ceil(page.total / page.per_page));
      pageLabelEl.textContent = `Page ${page.page} of ${pages}`;
      prevEl.disabled = page.page <= 1;
      nextEl.disabled = page.page >= pages;
    };

    const loadNutrition = async (page) => {
      const res = await fetch(`/api/nutrition?page=${page}`);
      if (!res.ok) {
        throw new Error(await res.text());
      }
      renderNutrition(await res.json());
    };

    const applyView = (view) => {
      startEl.value = view.start;
      endEl.value = view.end;
      renderChart(view);
    };

    const loadDashboard = async () => {
      const res = await fetch('/api/dashboard');
      if (!res.ok) {
        throw new Error('Unable to load dashboard');
      }
      const data = await res.json();
      if (data.measurement_error) {
        setStatus(statusEl, `Error: ${data.measurement_error}`, 'error');
      } else if (data.view) {
        applyView(data.view);
      } else {
        setStatus(statusEl, data.range_error || 'No data available for the selected date range', 'error');
      }
      if (data.nutrition_error) {
        setStatus(nutritionStatusEl, `Error: ${data.nutrition_error}`, 'error');
      } else if (data.nutrition) {
        renderNutrition(data.nutrition);
      }
    };

    const updateRange = async () => {
      setStatus(statusEl, '', '');
      const res = await fetch('/api/dashboard/range', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ start: startEl.value, end: endEl.value })
      });
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      applyView(await res.json());
    };

    document.getElementById('update').addEventListener('click', () => {
      updateRange().catch((err) => setStatus(statusEl, err.message, 'error'));
    });

    prevEl.addEventListener('click', () => {
      loadNutrition(nutritionPage.page - 1).catch((err) => setStatus(nutritionStatusEl, err.message, 'error'));
    });

    nextEl.addEventListener('click', () => {
      loadNutrition(nutritionPage.page + 1).catch((err) => setStatus(nutritionStatusEl, err.message, 'error'));
    });

    loadDashboard().catch((err) => setStatus(statusEl, err.message, 'error'));
  </script>
</body>
</html>
"##;

const ARTICLES_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Saved Articles</title>
  <style>
    :root {
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --line: rgba(47, 72, 88, 0.15);
    }

    body {
      margin: 0;
      padding: 32px 18px;
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      background: #f8f3e6;
    }

    .toolbar {
      display: flex;
      gap: 12px;
      align-items: center;
      margin-bottom: 16px;
    }

    .grid {
      display: grid;
      grid-template-columns: 2fr 1fr 2fr 3fr 1.5fr auto;
      border-top: 1px solid var(--line);
      border-left: 1px solid var(--line);
      background: white;
    }

    .grid > div {
      padding: 8px 10px;
      border-right: 1px solid var(--line);
      border-bottom: 1px solid var(--line);
      word-break: break-word;
    }

    .grid .header {
      font-weight: 600;
      background: rgba(47, 72, 88, 0.08);
    }

    .grid input,
    .grid textarea {
      width: 100%;
      font: inherit;
      box-sizing: border-box;
    }

    button {
      border: none;
      border-radius: 999px;
      padding: 8px 16px;
      font-weight: 600;
      cursor: pointer;
      color: white;
      background: var(--accent-2);
    }

    .delete-btn {
      background: var(--accent);
    }

    .status[data-type="error"] {
      color: #b3261e;
    }
  </style>
</head>
<body>
  <div class="toolbar">
    <button class="copy-json-btn" id="copy">Copy JSON</button>
    <button id="add">Add row</button>
    <a href="/">Dashboard</a>
    <span class="status" id="status"></span>
  </div>

  <div class="grid" id="grid">
    <div class="header">URL</div>
    <div class="header">Author</div>
    <div class="header">Title</div>
    <div class="header">Notes</div>
    <div class="header">Tags</div>
    <div class="header">Actions</div>
  </div>

  <script>
    const gridEl = document.getElementById('grid');
    const statusEl = document.getElementById('status');
    const copyEl = document.getElementById('copy');
    const columns = ['url', 'author', 'title', 'notes', 'tags'];

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const request = async (url, options) => {
      const res = await fetch(url, options);
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      return res;
    };

    const fillCell = (cell, column, row) => {
      if (column === 'notes') {
        cell.innerHTML = row.notes_html;
      } else {
        cell.textContent = row[column];
      }
    };

    const rowCells = (id) => Array.from(gridEl.querySelectorAll(`[data-row="${id}"]`));

    const appendRow = (row) => {
      columns.forEach((column) => {
        const cell = document.createElement('div');
        cell.dataset.row = row.id;
        cell.dataset.column = column;
        fillCell(cell, column, row);
        gridEl.appendChild(cell);
      });
      const actions = document.createElement('div');
      actions.dataset.row = row.id;
      const button = document.createElement('button');
      button.className = 'delete-btn';
      button.textContent = 'Delete';
      button.addEventListener('click', () => {
        deleteRow(row.id).catch((err) => setStatus(err.message, 'error'));
      });
      actions.appendChild(button);
      gridEl.appendChild(actions);
    };

    const deleteRow = async (id) => {
      await request(`/api/articles/${id}`, { method: 'DELETE' });
      rowCells(id).forEach((cell) => cell.remove());
    };

    const beginEdit = async (cell) => {
      const { row, column } = cell.dataset;
      const res = await request(`/api/articles/${row}/${column}/edit`);
      const { value } = await res.json();

      const input = document.createElement(column === 'notes' ? 'textarea' : 'input');
      input.value = value;
      cell.innerHTML = '';
      cell.appendChild(input);
      input.focus();

      let committed = false;
      const commit = async () => {
        if (committed) {
          return;
        }
        committed = true;
        const saved = await request(`/api/articles/${row}/${column}`, {
          method: 'PUT',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify({ value: input.value })
        });
        const body = await saved.json();
        fillCell(cell, column, body.row);
      };

      input.addEventListener('blur', () => {
        commit().catch((err) => setStatus(err.message, 'error'));
      });
      input.addEventListener('keydown', (event) => {
        if (event.key === 'Enter' && !(column === 'notes' && event.shiftKey)) {
          event.preventDefault();
          input.blur();
        }
      });
    };

    gridEl.addEventListener('dblclick', (event) => {
      const cell = event.target.closest('[data-column]');
      if (!cell || cell.querySelector('input, textarea')) {
        return;
      }
      beginEdit(cell).catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('add').addEventListener('click', async () => {
      try {
        const res = await request('/api/articles', {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: '{}'
        });
        appendRow(await res.json());
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    copyEl.addEventListener('click', async () => {
      try {
        const res = await request('/api/articles/export');
        const text = await res.text();
        const temp = document.createElement('textarea');
        temp.value = text;
        document.body.appendChild(temp);
        temp.select();
        document.execCommand('copy');
        document.body.removeChild(temp);
        copyEl.textContent = 'Copied!';
        setTimeout(() => {
          copyEl.textContent = 'Copy JSON';
        }, 2000);
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    const loadArticles = async () => {
      const res = await request('/api/articles');
      const data = await res.json();
      if (data.load_error) {
        setStatus(`Error: ${data.load_error}`, 'error');
      }
      data.rows.forEach(appendRow);
    };

    loadArticles().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_reference_their_endpoints() {
        assert!(render_dashboard().contains("/api/dashboard/range"));
        assert!(render_articles().contains("/api/articles/export"));
        assert!(render_articles().contains("Copied!"));
    }
}
