//! Server-rendered HTML pages.
//!
//! Every piece of user-provided text goes through [`escape`] before being interpolated.

use super::flash::Flash;
use super::forms::{CreateEventForm, RegisterForm, SearchForm};
use crate::events::model::{Category, Event, Stats};
use axum::response::Html;
use strum::IntoEnumIterator;
use voca_rs::escape::escape_html;

const SITE_NAME: &str = "Gestión de Eventos";

fn escape(text: &str) -> String {
    escape_html(text)
}

pub fn event_path(event: &Event) -> String {
    format!("/event/{}/", event.slug)
}

fn layout(title: &str, flash: Option<&Flash>, content: &str) -> Html<String> {
    let flash = flash
        .map(|flash| {
            format!(
                r#"<div class="flash flash-{}">{}</div>"#,
                flash.level,
                escape(&flash.message)
            )
        })
        .unwrap_or_default();

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
<meta charset="utf-8">
<title>{title} | {site}</title>
</head>
<body>
<nav>
<a href="/">Inicio</a>
<a href="/search/">Buscar</a>
<a href="/events/past/">Eventos pasados</a>
<a href="/admin/">Administración</a>
<a href="/admin/event/">Crear evento</a>
</nav>
{flash}
<main>
<h1>{title}</h1>
{content}
</main>
</body>
</html>"#,
        title = escape(title),
        site = SITE_NAME,
        flash = flash,
        content = content,
    ))
}

fn category_links() -> String {
    let links: String = Category::iter()
        .map(|category| {
            let name = escape(category.into());
            format!(r#"<li><a href="/events/category/{name}/">{name}</a></li>"#)
        })
        .collect();

    format!(r#"<ul class="categories">{links}</ul>"#)
}

fn category_options(selected: &str, allow_any: bool) -> String {
    let mut options = String::new();

    if allow_any {
        options.push_str(r#"<option value="">Todas</option>"#);
    }
    for category in Category::iter() {
        let name: &'static str = category.into();
        let selected = if name == selected { " selected" } else { "" };
        options.push_str(&format!(
            r#"<option value="{value}"{selected}>{value}</option>"#,
            value = escape(name)
        ));
    }

    options
}

fn event_card(event: &Event) -> String {
    let featured = if event.featured {
        r#"<span class="badge">Destacado</span>"#
    } else {
        ""
    };

    format!(
        r#"<article class="event">
<h2><a href="{path}">{title}</a> {featured}</h2>
<p>{date} {time} · {location} · {category}</p>
<p>{attendees}/{max} asistentes</p>
</article>"#,
        path = event_path(event),
        title = escape(&event.title),
        date = event.date.format("%Y-%m-%d"),
        time = escape(&event.time),
        location = escape(&event.location),
        category = event.category,
        attendees = event.attendees.len(),
        max = event.max_attendees,
    )
}

fn event_list(events: &[Event]) -> String {
    if events.is_empty() {
        return r#"<p class="empty">No hay eventos.</p>"#.to_string();
    }

    events.iter().map(event_card).collect()
}

fn search_form(form: &SearchForm) -> String {
    format!(
        r#"<form method="post" action="/search/" class="search">
<input type="text" name="q" maxlength="100" placeholder="Buscar por título, descripción o ubicación..." value="{q}">
<select name="category">{options}</select>
<button type="submit">Buscar</button>
</form>"#,
        q = escape(&form.q),
        options = category_options(&form.category, true),
    )
}

pub fn index_page(events: &[Event], flash: Option<&Flash>) -> Html<String> {
    let content = format!(
        "{}{}<section>{}</section>",
        search_form(&SearchForm::default()),
        category_links(),
        event_list(events)
    );

    layout("Próximos eventos", flash, &content)
}

pub fn event_detail_page(event: &Event, flash: Option<&Flash>) -> Html<String> {
    let attendees: String = event
        .attendees
        .iter()
        .map(|attendee| {
            format!(
                r#"<li>{name}
<form method="post" action="{path}unregister/" class="inline">
<input type="hidden" name="email" value="{email}">
<button type="submit">Cancelar registro</button>
</form></li>"#,
                name = escape(&attendee.name),
                email = escape(&attendee.email),
                path = event_path(event),
            )
        })
        .collect();

    let register = if event.is_full() {
        r#"<p class="full">El evento ya está completo</p>"#.to_string()
    } else {
        format!(
            r#"<p><a href="{}register/">Registrarse</a> ({} plazas libres)</p>"#,
            event_path(event),
            event.spots_left()
        )
    };

    let content = format!(
        r#"<p>{description}</p>
<dl>
<dt>Fecha</dt><dd>{date} {time}</dd>
<dt>Ubicación</dt><dd>{location}</dd>
<dt>Categoría</dt><dd><a href="/events/category/{category}/">{category}</a></dd>
<dt>Asistentes</dt><dd>{count}/{max}</dd>
</dl>
{register}
<h2>Asistentes</h2>
<ul class="attendees">{attendees}</ul>"#,
        description = escape(&event.description),
        date = event.date.format("%Y-%m-%d"),
        time = escape(&event.time),
        location = escape(&event.location),
        category = escape(event.category.into()),
        count = event.attendees.len(),
        max = event.max_attendees,
        register = register,
        attendees = attendees,
    );

    layout(&event.title, flash, &content)
}

pub fn create_event_page(form: &CreateEventForm, flash: Option<&Flash>) -> Html<String> {
    let featured = if form.is_featured() { " checked" } else { "" };

    let content = format!(
        r#"<form method="post" action="/admin/event/">
<label>Título del Evento <input type="text" name="title" value="{title}" placeholder="Ej: Conferencia de Python 2025"></label>
<label>Descripción <textarea name="description" rows="4" placeholder="Describe tu evento...">{description}</textarea></label>
<label>Categoría <select name="category">{options}</select></label>
<label>Fecha <input type="date" name="date" value="{date}"></label>
<label>Hora <input type="time" name="time" value="{time}"></label>
<label>Ubicación <input type="text" name="location" value="{location}" placeholder="Ej: Auditorio Principal"></label>
<label>Máximo de Asistentes <input type="number" name="max_attendees" min="1" max="1000" value="{max}" placeholder="Ej: 50"></label>
<label><input type="checkbox" name="featured"{featured}> Evento Destacado</label>
<button type="submit">Crear Evento</button>
</form>"#,
        title = escape(&form.title),
        description = escape(&form.description),
        options = category_options(&form.category, false),
        date = escape(&form.date),
        time = escape(&form.time),
        location = escape(&form.location),
        max = escape(&form.max_attendees),
        featured = featured,
    );

    layout("Crear evento", flash, &content)
}

pub fn register_page(event: &Event, form: &RegisterForm, flash: Option<&Flash>) -> Html<String> {
    let content = format!(
        r#"<p><a href="{path}">{title}</a> · {date} {time} · {spots} plazas libres</p>
<form method="post" action="{path}register/">
<label>Nombre Completo <input type="text" name="name" value="{name}" placeholder="Tu nombre completo"></label>
<label>Correo Electrónico <input type="email" name="email" value="{email}" placeholder="tu@email.com"></label>
<button type="submit">Confirmar Registro</button>
</form>"#,
        path = event_path(event),
        title = escape(&event.title),
        date = event.date.format("%Y-%m-%d"),
        time = escape(&event.time),
        spots = event.spots_left(),
        name = escape(&form.name),
        email = escape(&form.email),
    );

    layout("Registro al evento", flash, &content)
}

pub fn search_page(form: &SearchForm, results: &[Event], flash: Option<&Flash>) -> Html<String> {
    let content = format!(
        r#"{}<p>{} resultados</p><section>{}</section>"#,
        search_form(form),
        results.len(),
        event_list(results)
    );

    layout("Buscar eventos", flash, &content)
}

pub fn events_page(heading: &str, events: &[Event], flash: Option<&Flash>) -> Html<String> {
    let content = format!("{}<section>{}</section>", category_links(), event_list(events));

    layout(heading, flash, &content)
}

pub fn admin_page(stats: &Stats, events: &[Event], flash: Option<&Flash>) -> Html<String> {
    let by_category: String = stats
        .counts_by_category
        .iter()
        .map(|(category, count)| format!("<li>{}: {}</li>", category, count))
        .collect();

    let rows: String = events
        .iter()
        .map(|event| {
            let toggle_label = if event.featured {
                "Quitar destacado"
            } else {
                "Destacar"
            };

            format!(
                r#"<tr>
<td>{id}</td>
<td><a href="{path}">{title}</a></td>
<td>{date}</td>
<td>{category}</td>
<td>{count}/{max}</td>
<td>{featured}</td>
<td>
<form method="post" action="/admin/event/{slug}/toggle-featured/" class="inline"><button type="submit">{toggle_label}</button></form>
<form method="post" action="/admin/event/{slug}/delete/" class="inline"><button type="submit">Eliminar</button></form>
</td>
</tr>"#,
                id = event.id,
                path = event_path(event),
                title = escape(&event.title),
                date = event.date.format("%Y-%m-%d"),
                category = event.category,
                count = event.attendees.len(),
                max = event.max_attendees,
                featured = if event.featured { "Sí" } else { "No" },
                slug = event.slug,
                toggle_label = toggle_label,
            )
        })
        .collect();

    let content = format!(
        r#"<section class="stats">
<p>Total de eventos: {total}</p>
<p>Próximos eventos: {upcoming}</p>
<p>Total de asistentes: {attendees}</p>
<p>Eventos destacados: {featured}</p>
<ul>{by_category}</ul>
</section>
<p><a href="/admin/event/">Crear evento</a></p>
<table>
<thead><tr><th>ID</th><th>Título</th><th>Fecha</th><th>Categoría</th><th>Asistentes</th><th>Destacado</th><th></th></tr></thead>
<tbody>{rows}</tbody>
</table>"#,
        total = stats.total_events,
        upcoming = stats.upcoming_count,
        attendees = stats.total_attendees,
        featured = stats.featured_count,
        by_category = by_category,
        rows = rows,
    );

    layout("Panel de administración", flash, &content)
}
