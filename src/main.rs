mod auth;
mod edit;
mod error;
mod guard;
mod list;
mod remote;
mod session;
mod system;

#[cfg(test)]
mod mock_gateway;

use tracing::{error, info};

use crate::edit::EditForm;
use crate::guard::{parse_route, resolve, Resolution, Route, View};
use crate::system::{setup_tracing, AppSystem};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let base_url =
        std::env::var("USER_CONSOLE_URL").unwrap_or_else(|_| "https://reqres.in".to_string());
    info!(%base_url, "Starting user console");

    let mut system = AppSystem::new(base_url);

    // Navigation starts at the users route; without a stored token the
    // guard bounces us to the login view.
    let mut route = parse_route("/users");
    if let Resolution::Redirect(target) = resolve(route, &system.session) {
        info!(?target, "Redirected by route guard");
        route = Some(target);
    }

    if route == Some(Route::Login) {
        let email =
            std::env::var("USER_CONSOLE_EMAIL").unwrap_or_else(|_| "eve.holt@reqres.in".to_string());
        let password =
            std::env::var("USER_CONSOLE_PASSWORD").unwrap_or_else(|_| "cityslicka".to_string());

        match system.login.login(&mut system.session, &email, &password).await {
            Ok(next) => route = Some(next),
            Err(e) => {
                error!(error = %e, "Login failed");
                system.shutdown().await?;
                return Err("login failed".to_string());
            }
        }
    }

    // The guard is re-evaluated for the post-login navigation.
    match resolve(route, &system.session) {
        Resolution::Render(View::UserList) => {}
        other => {
            error!(?other, "Users route not reachable");
            system.shutdown().await?;
            return Err("users route not reachable".to_string());
        }
    }

    system
        .user_list
        .load_page(1)
        .await
        .map_err(|e| e.to_string())?;
    info!(
        page = system.user_list.current_page(),
        total_pages = system.user_list.total_pages(),
        "Roster loaded"
    );
    for user in system.user_list.current_records() {
        info!(
            id = user.id,
            first_name = %user.first_name,
            last_name = %user.last_name,
            email = %user.email,
            "User"
        );
    }

    // Edit the first user on the page through the draft form.
    if let Some(first) = system.user_list.current_records().first().cloned() {
        let mut form = EditForm::new(&first);
        form.set_first_name("Edited");
        let user_list = &mut system.user_list;
        match form.submit(|draft| user_list.update_record(draft)).await {
            Some(Ok(())) => info!(id = first.id, "User updated"),
            Some(Err(e)) => error!(error = %e, "Update failed"),
            None => {}
        }
    }

    // Delete the last user on the page; the page count is left as the
    // server last reported it.
    if let Some(last) = system.user_list.current_records().last().map(|u| u.id) {
        match system.user_list.delete_record(last).await {
            Ok(()) => info!(id = last, "User deleted"),
            Err(e) => error!(error = %e, "Delete failed"),
        }
    }

    if let Some(status) = system.user_list.status() {
        info!(?status, "Final status");
    }

    system.session.logout();
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
