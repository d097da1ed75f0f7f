//! Schedule and student roster (guarded).

use leptos::prelude::*;

#[component]
pub fn SchedulePage() -> impl IntoView {
    view! {
        <section class="schedule">
            <h1>"Schedule"</h1>
            <p>"No sessions booked this week."</p>
        </section>
    }
}

#[component]
pub fn StudentsPage() -> impl IntoView {
    view! {
        <section class="students">
            <h1>"Students"</h1>
            <p>"No students yet."</p>
        </section>
    }
}
