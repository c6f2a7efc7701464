pub fn render_index(month: &str) -> String {
    INDEX_HTML.replace("{{MONTH}}", month)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Office Attendance Tracker</title>
  <style>
    :root {
      --bg: #f4f1ea;
      --ink: #2b2a28;
      --muted: #7a756d;
      --accent: #2f6f62;
      --accent-2: #d9822b;
      --card: #ffffff;
      --weekend: #ece8df;
      --holiday: #f7dfc4;
      --before: #f1efe9;
      --shadow: 0 18px 40px rgba(43, 42, 40, 0.12);
    }

    * { box-sizing: border-box; }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 28px 16px 48px;
    }

    .app {
      width: min(920px, 100%);
      background: var(--card);
      border-radius: 22px;
      box-shadow: var(--shadow);
      padding: 28px;
      display: grid;
      gap: 22px;
    }

    h1 { margin: 0; font-family: Georgia, serif; }
    .row { display: flex; flex-wrap: wrap; gap: 10px; align-items: center; }
    .row label { display: grid; gap: 4px; font-size: 0.8rem; color: var(--muted); }

    input, select, textarea {
      font: inherit;
      padding: 8px 10px;
      border-radius: 10px;
      border: 1px solid #d6d0c4;
    }

    textarea { width: 100%; min-height: 60px; }

    button {
      font: inherit;
      border: none;
      border-radius: 999px;
      padding: 8px 16px;
      background: var(--accent);
      color: white;
      cursor: pointer;
    }

    button.secondary { background: #e4dfd5; color: var(--ink); }
    button.danger { background: #b5483a; }

    .stats { display: grid; grid-template-columns: repeat(auto-fit, minmax(130px, 1fr)); gap: 12px; }
    .stat { border: 1px solid #eee7da; border-radius: 14px; padding: 12px; }
    .stat .label { font-size: 0.75rem; text-transform: uppercase; letter-spacing: 0.1em; color: var(--muted); }
    .stat .value { font-size: 1.5rem; font-weight: 600; color: var(--accent); }

    .progress { height: 10px; border-radius: 999px; background: #eee7da; overflow: hidden; }
    .progress > div { height: 100%; background: var(--accent); width: 0; transition: width 200ms ease; }

    .calendar { display: grid; grid-template-columns: repeat(7, 1fr); gap: 6px; }
    .calendar .head { font-size: 0.75rem; text-align: center; color: var(--muted); }
    .day {
      min-height: 52px;
      border-radius: 10px;
      border: 1px solid #e5dfd3;
      padding: 6px;
      font-size: 0.85rem;
      background: white;
    }
    .day.working { cursor: pointer; }
    .day.weekend { background: var(--weekend); color: var(--muted); }
    .day.holiday { background: var(--holiday); }
    .day.before_start { background: var(--before); color: var(--muted); }
    .day.attended { background: var(--accent); color: white; }
    .day.attended.stray { background: #9bb8b1; }

    svg { width: 100%; height: 240px; }
    .chart-target { fill: none; stroke: var(--accent-2); stroke-width: 2; stroke-dasharray: 6 4; }
    .chart-actual { fill: none; stroke: var(--accent); stroke-width: 3; }
    .chart-axis { stroke: #d6d0c4; }
    .chart-label { font-size: 11px; fill: var(--muted); }

    #status { min-height: 1.2em; font-size: 0.9rem; color: var(--muted); }
    #status[data-type="error"] { color: #b5483a; }
  </style>
</head>
<body>
  <main class="app">
    <header class="row" style="justify-content: space-between">
      <h1>Office Attendance</h1>
      <div class="row">
        <select id="profile-select"></select>
        <button class="secondary" id="new-profile">New profile</button>
        <button class="danger" id="delete-profile">Delete</button>
      </div>
    </header>

    <section class="row">
      <label>Name <input id="name" /></label>
      <label>Join date <input id="join-date" type="date" /></label>
      <label>Days per week
        <select id="days-per-week">
          <option>0</option><option>1</option><option>2</option>
          <option>3</option><option>4</option><option>5</option>
        </select>
      </label>
      <button id="save-profile">Save</button>
    </section>

    <section class="row">
      <button class="secondary" id="prev-month">&larr;</button>
      <input id="month" type="month" value="{{MONTH}}" />
      <button class="secondary" id="next-month">&rarr;</button>
    </section>

    <section class="stats">
      <div class="stat"><div class="label">Working days</div><div class="value" id="working">--</div></div>
      <div class="stat"><div class="label">Required</div><div class="value" id="required">--</div></div>
      <div class="stat"><div class="label">Completed</div><div class="value" id="completed">--</div></div>
      <div class="stat"><div class="label">Remaining</div><div class="value" id="remaining">--</div></div>
      <div class="stat"><div class="label">Progress</div><div class="value" id="percent">--</div></div>
    </section>
    <div class="progress"><div id="progress-bar"></div></div>

    <section class="calendar" id="calendar"></section>

    <section>
      <label for="holidays">Holidays this month (YYYY-MM-DD, comma separated)</label>
      <textarea id="holidays"></textarea>
      <div class="row"><button id="save-holidays">Save holidays</button></div>
    </section>

    <svg id="chart" viewBox="0 0 600 240" preserveAspectRatio="none"></svg>

    <section class="row">
      <button class="secondary" id="export">Export</button>
      <button class="secondary" id="import">Import</button>
      <button class="secondary" id="share">Copy share link</button>
      <input id="import-file" type="file" accept="application/json" hidden />
    </section>
    <div id="status"></div>
  </main>

  <script>
    const $ = (id) => document.getElementById(id);
    const monthInput = $('month');
    let profiles = [];
    let activeId = null;

    const setStatus = (message, type) => {
      $('status').textContent = message;
      $('status').dataset.type = type || '';
    };

    const api = async (path, options = {}) => {
      const response = await fetch(path, {
        headers: { 'Content-Type': 'application/json' },
        ...options,
      });
      if (!response.ok) {
        throw new Error(await response.text());
      }
      return response.json();
    };

    const activeProfile = () => profiles.find((p) => p.id === activeId);

    const renderProfiles = (data) => {
      profiles = data.profiles;
      activeId = data.active;
      const select = $('profile-select');
      select.innerHTML = '';
      for (const profile of profiles) {
        const option = document.createElement('option');
        option.value = profile.id;
        option.textContent = profile.name;
        option.selected = profile.id === activeId;
        select.appendChild(option);
      }
      const profile = activeProfile();
      if (profile) {
        $('name').value = profile.name;
        $('join-date').value = profile.joinDate;
        $('days-per-week').value = String(profile.daysPerWeek);
      }
    };

    const renderCalendar = (view) => {
      const calendar = $('calendar');
      calendar.innerHTML = '';
      for (const head of ['Mon', 'Tue', 'Wed', 'Thu', 'Fri', 'Sat', 'Sun']) {
        const cell = document.createElement('div');
        cell.className = 'head';
        cell.textContent = head;
        calendar.appendChild(cell);
      }
      const first = new Date(view.days[0].date + 'T00:00:00');
      const offset = (first.getDay() + 6) % 7;
      for (let i = 0; i < offset; i += 1) {
        calendar.appendChild(document.createElement('div'));
      }
      for (const day of view.days) {
        const cell = document.createElement('div');
        cell.className = `day ${day.kind}`;
        if (day.attended) {
          cell.classList.add('attended');
          if (day.kind !== 'working') cell.classList.add('stray');
        }
        cell.textContent = Number(day.date.slice(8));
        if (day.kind === 'working' || day.attended) {
          cell.classList.add('working');
          cell.addEventListener('click', () => toggle(day.date));
        }
        calendar.appendChild(cell);
      }
    };

    const renderChart = (series) => {
      const chart = $('chart');
      const width = 600;
      const height = 240;
      const pad = 28;
      const maxY = Math.max(1, ...series.map((p) => Math.max(p.target, p.actual)));
      const x = (i) => pad + (i * (width - 2 * pad)) / Math.max(1, series.length - 1);
      const y = (v) => height - pad - (v * (height - 2 * pad)) / maxY;
      const line = (key) => series.map((p, i) => `${i ? 'L' : 'M'}${x(i).toFixed(1)},${y(p[key]).toFixed(1)}`).join(' ');
      chart.innerHTML = `
        <line class="chart-axis" x1="${pad}" y1="${height - pad}" x2="${width - pad}" y2="${height - pad}" />
        <path class="chart-target" d="${line('target')}" />
        <path class="chart-actual" d="${line('actual')}" />
        <text class="chart-label" x="${pad}" y="${pad - 8}">${maxY.toFixed(1)}</text>
        <text class="chart-label" x="${width - pad}" y="${height - 8}" text-anchor="end">day ${series.length}</text>`;
    };

    const renderMonth = (view) => {
      const s = view.summary;
      $('working').textContent = s.workingDayCount;
      $('required').textContent = s.required;
      $('completed').textContent = s.completed;
      $('remaining').textContent = s.remaining;
      $('percent').textContent = `${s.percent}%`;
      $('progress-bar').style.width = `${s.percent}%`;
      $('holidays').value = view.holidays.join(', ');
      renderCalendar(view);
      renderChart(view.series);
    };

    const loadMonth = async () => {
      if (!activeId) return;
      renderMonth(await api(`/api/profiles/${activeId}/months/${monthInput.value}`));
    };

    const loadProfiles = async () => {
      renderProfiles(await api('/api/profiles'));
      await loadMonth();
    };

    const toggle = async (date) => {
      try {
        renderMonth(await api(`/api/profiles/${activeId}/attendance`, {
          method: 'POST',
          body: JSON.stringify({ date }),
        }));
      } catch (err) {
        setStatus(err.message, 'error');
      }
    };

    const shiftMonth = (delta) => {
      const [year, month] = monthInput.value.split('-').map(Number);
      const next = new Date(year, month - 1 + delta, 1);
      monthInput.value = `${next.getFullYear()}-${String(next.getMonth() + 1).padStart(2, '0')}`;
      loadMonth().catch((err) => setStatus(err.message, 'error'));
    };

    const run = (fn) => async () => {
      try {
        await fn();
      } catch (err) {
        setStatus(err.message, 'error');
      }
    };

    $('prev-month').addEventListener('click', () => shiftMonth(-1));
    $('next-month').addEventListener('click', () => shiftMonth(1));
    monthInput.addEventListener('change', run(loadMonth));

    $('profile-select').addEventListener('change', run(async () => {
      renderProfiles(await api(`/api/profiles/${$('profile-select').value}/select`, { method: 'POST' }));
      await loadMonth();
    }));

    $('new-profile').addEventListener('click', run(async () => {
      const name = prompt('Profile name');
      if (!name) return;
      const today = new Date().toISOString().slice(0, 10);
      await api('/api/profiles', {
        method: 'POST',
        body: JSON.stringify({ name, joinDate: today, daysPerWeek: 3 }),
      });
      await loadProfiles();
    }));

    $('delete-profile').addEventListener('click', run(async () => {
      const profile = activeProfile();
      if (!profile || !confirm(`Delete ${profile.name}?`)) return;
      await api(`/api/profiles/${profile.id}`, { method: 'DELETE' });
      await loadProfiles();
    }));

    $('save-profile').addEventListener('click', run(async () => {
      await api(`/api/profiles/${activeId}`, {
        method: 'PUT',
        body: JSON.stringify({
          name: $('name').value,
          joinDate: $('join-date').value,
          daysPerWeek: Number($('days-per-week').value),
        }),
      });
      await loadProfiles();
      setStatus('Profile saved');
    }));

    $('save-holidays').addEventListener('click', run(async () => {
      renderMonth(await api(`/api/profiles/${activeId}/months/${monthInput.value}/holidays`, {
        method: 'PUT',
        body: JSON.stringify({ text: $('holidays').value }),
      }));
      setStatus('Holidays saved');
    }));

    $('export').addEventListener('click', run(async () => {
      const profile = await api(`/api/profiles/${activeId}/export`);
      const blob = new Blob([JSON.stringify(profile, null, 2)], { type: 'application/json' });
      const link = document.createElement('a');
      link.href = URL.createObjectURL(blob);
      link.download = `${profile.name || 'profile'}.json`;
      link.click();
      URL.revokeObjectURL(link.href);
    }));

    $('import').addEventListener('click', () => $('import-file').click());
    $('import-file').addEventListener('change', run(async () => {
      const file = $('import-file').files[0];
      if (!file) return;
      const response = await fetch('/api/profiles/import', { method: 'POST', body: await file.text() });
      $('import-file').value = '';
      if (!response.ok) {
        throw new Error(`Import rejected: ${await response.text()}`);
      }
      await loadProfiles();
      setStatus('Profile imported');
    }));

    $('share').addEventListener('click', run(async () => {
      const link = await api(`/api/profiles/${activeId}/share`);
      const url = `${window.location.origin}${link.path}`;
      await navigator.clipboard.writeText(url);
      setStatus('Share link copied');
    }));

    loadProfiles().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
