use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use checkout::models::address::LocalAddressService;
use checkout::{
    MemoryRouter, Navigator, ShippingAddressForm, SubmissionCoordinator, SubmitOutcome,
    ToastQueue, Toaster, UpdateAddress,
};
use common::address::AddressField;
use common::application::Application;
use common::error::ApiResult;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let app = match Application::init().await {
        Ok(app) => app,
        Err(e) => {
            eprintln!("application load err: {}, using defaults", e);
            Application::default()
        }
    };
    common::init_tracing(&app.log_level);

    let service = LocalAddressService::new(app.checkout.session_user_id);
    if let Some(id) = app.checkout.session_user_id {
        service.add_user(id);
    }

    let toasts = ToastQueue::default();
    let router = MemoryRouter::default();
    let coordinator = SubmissionCoordinator::new(service.clone(), toasts.clone(), router.clone())
        .with_next_step(app.checkout.next_step.clone());
    let form = ShippingAddressForm::new(service.session_address(), coordinator);

    if let Err(e) = run(&form, &toasts, &router).await {
        tracing::error!("checkout err: {}", e);
        std::process::exit(-1);
    }
}

async fn run<A, T, N>(
    form: &ShippingAddressForm<A, T, N>,
    toasts: &ToastQueue,
    router: &MemoryRouter,
) -> ApiResult<()>
where
    A: UpdateAddress,
    T: Toaster,
    N: Navigator,
{
    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        stdout.write_all(render(form).as_bytes()).await?;
        stdout.flush().await?;

        let line = match lines.next_line().await? {
            Some(line) => line,
            None => return Ok(()),
        };

        match line.trim() {
            "" => continue,
            "quit" | "exit" => return Ok(()),
            "submit" => match form.handle_submit().await {
                SubmitOutcome::Invalid(_) | SubmitOutcome::Busy => {}
                SubmitOutcome::Failed(_) => {
                    if let Some(toast) = toasts.dismiss() {
                        stdout
                            .write_all(format!("\n[!] {}\n", toast.description).as_bytes())
                            .await?;
                    }
                }
                SubmitOutcome::Navigated(path) => {
                    stdout.write_all(format!("\n=> {}\n", path).as_bytes()).await?;
                    tracing::debug!(history = ?router.history(), "checkout finished");
                    return Ok(());
                }
            },
            command => match command.split_once('=') {
                Some((name, value)) => match AddressField::from_name(name.trim()) {
                    Some(field) => form.set_field(field, value.trim()),
                    None => {
                        stdout
                            .write_all(format!("unknown field: {}\n", name.trim()).as_bytes())
                            .await?
                    }
                },
                None => {
                    stdout
                        .write_all(b"usage: <field>=<value> | submit | quit\n")
                        .await?
                }
            },
        }
    }
}

fn render<A, T, N>(form: &ShippingAddressForm<A, T, N>) -> String
where
    A: UpdateAddress,
    T: Toaster,
    N: Navigator,
{
    let mut out = String::from("\nShipping Address\nPlease enter an address to ship to\n\n");

    for field in AddressField::ALL {
        let value = form.field(field);
        let shown = if value.is_empty() {
            format!("<{}>", field.placeholder())
        } else {
            value
        };
        out.push_str(&format!("  {:<14} {:<22} {}\n", field.name(), field.label(), shown));
        if let Some(err) = form.field_error(field) {
            out.push_str(&format!("  {:<14} ! {}\n", "", err));
        }
    }

    let button = if form.is_pending() { "..." } else { "->" };
    out.push_str(&format!("\n  [{} Continue] > ", button));
    out
}
