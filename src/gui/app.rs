//! SSG Dashboard Main Application
//! Single window wiring route selection, background fetches and the chart.

use crate::api::ApiClient;
use crate::data::{RateRecord, Seaport, SeriesDecomposition};
use crate::export::Exporter;
use crate::gui::{
    ChartView, ChartViewAction, ChartViewState, PortPicker, RouteEnd, RoutePanel, RoutePanelAction,
};
use std::sync::mpsc::{channel, Receiver};
use std::thread;

/// Seaport directory fetch result from background thread
enum PortsResult {
    Complete(Vec<Seaport>),
    Error(String),
}

/// Rate series fetch result from background thread
enum RatesResult {
    Complete(Vec<RateRecord>),
    Error(String),
}

/// Main application window.
pub struct SsgApp {
    client: ApiClient,

    seaports: Vec<Seaport>,
    records: Vec<RateRecord>,
    decomposition: SeriesDecomposition,

    route_panel: RoutePanel,
    port_picker: PortPicker,
    chart_view: ChartView,

    api_error: Option<String>,
    has_fetched: bool,

    // Async seaport directory loading (once, at startup)
    ports_rx: Option<Receiver<PortsResult>>,
    is_loading: bool,

    // Async rate series fetch
    rates_rx: Option<Receiver<RatesResult>>,
    is_fetching: bool,
}

impl SsgApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, client: ApiClient) -> Self {
        let mut app = Self {
            client,
            seaports: Vec::new(),
            records: Vec::new(),
            decomposition: SeriesDecomposition::default(),
            route_panel: RoutePanel::new(),
            port_picker: PortPicker::new(),
            chart_view: ChartView::new(),
            api_error: None,
            has_fetched: false,
            ports_rx: None,
            is_loading: false,
            rates_rx: None,
            is_fetching: false,
        };
        app.start_ports_fetch();
        app
    }

    /// One-shot directory load; the list is held for the session lifetime.
    fn start_ports_fetch(&mut self) {
        self.is_loading = true;

        let (tx, rx) = channel();
        self.ports_rx = Some(rx);

        let client = self.client.clone();
        thread::spawn(move || {
            let result = match client.fetch_seaports() {
                Ok(ports) => PortsResult::Complete(ports),
                Err(e) => PortsResult::Error(e.to_string()),
            };
            let _ = tx.send(result);
        });
    }

    /// Start a rate fetch for the selected route. No-op while search is
    /// disabled or another fetch is in flight.
    fn start_rates_fetch(&mut self) {
        if self.is_fetching {
            return;
        }
        let Some((origin, destination)) = self
            .route_panel
            .route
            .codes()
            .map(|(f, t)| (f.to_string(), t.to_string()))
        else {
            return;
        };

        self.api_error = None;
        self.is_fetching = true;

        let (tx, rx) = channel();
        self.rates_rx = Some(rx);

        let client = self.client.clone();
        thread::spawn(move || {
            let result = match client.fetch_rates(&origin, &destination) {
                Ok(records) => RatesResult::Complete(records),
                Err(e) => RatesResult::Error(e.to_string()),
            };
            let _ = tx.send(result);
        });
    }

    /// Check for directory loading results
    fn check_ports_results(&mut self) {
        let rx = self.ports_rx.take();
        if let Some(rx) = rx {
            let mut should_keep_receiver = true;

            while let Ok(result) = rx.try_recv() {
                match result {
                    PortsResult::Complete(ports) => {
                        self.seaports = ports;
                        self.is_loading = false;
                        should_keep_receiver = false;
                    }
                    PortsResult::Error(message) => {
                        self.api_error = Some(message);
                        self.is_loading = false;
                        should_keep_receiver = false;
                    }
                }
            }

            if should_keep_receiver {
                self.ports_rx = Some(rx);
            }
        }
    }

    /// Check for rate fetch results
    fn check_rates_results(&mut self) {
        let rx = self.rates_rx.take();
        if let Some(rx) = rx {
            let mut should_keep_receiver = true;

            while let Ok(result) = rx.try_recv() {
                match result {
                    RatesResult::Complete(records) => {
                        self.records = records;
                        self.decomposition = SeriesDecomposition::from_records(&self.records);
                        let (from, to) = self.decomposition.date_range();
                        self.chart_view.set_date_range(from, to);
                        self.chart_view.status.clear();
                        self.has_fetched = true;
                        self.is_fetching = false;
                        should_keep_receiver = false;
                    }
                    RatesResult::Error(message) => {
                        // A failed fetch clears dependent chart state.
                        self.records.clear();
                        self.decomposition = SeriesDecomposition::default();
                        self.chart_view.clear();
                        self.api_error = Some(message);
                        self.has_fetched = true;
                        self.is_fetching = false;
                        should_keep_receiver = false;
                    }
                }
            }

            if should_keep_receiver {
                self.rates_rx = Some(rx);
            }
        }
    }

    fn handle_clear(&mut self) {
        self.route_panel.route.clear();
        self.records.clear();
        self.decomposition = SeriesDecomposition::default();
        self.chart_view.clear();
        self.api_error = None;
        self.has_fetched = false;
    }

    /// Render the current series and save it under a generated filename.
    fn handle_export(&mut self) {
        let Some(points) = self.decomposition.complete_points() else {
            self.chart_view.status = "No chart to export".to_string();
            return;
        };
        let Some((from, to)) = self
            .route_panel
            .route
            .codes()
            .map(|(f, t)| (f.to_string(), t.to_string()))
        else {
            return;
        };

        let (date_from, date_to) = self.chart_view.parsed_dates();
        let filename = Exporter::export_filename(&from, &to, date_from, date_to);
        let title = format!("{from} → {to}");

        let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG Image", &["png"])
            .set_file_name(&filename)
            .save_file()
        else {
            return; // User cancelled
        };

        match Exporter::write_png(&points, &title, &path) {
            Ok(()) => {
                let shown = path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_else(|| filename.clone());
                self.chart_view.status = format!("Exported {}", shown);
                Exporter::open_with_default_app(&path);
            }
            Err(e) => {
                tracing::error!("Export failed: {}", e);
                self.chart_view.status = format!("Export failed: {}", e);
            }
        }
    }
}

impl eframe::App for SsgApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for background results
        self.check_ports_results();
        self.check_rates_results();

        // Request repaint while a fetch is in flight
        if self.is_loading || self.is_fetching {
            ctx.request_repaint();
        }

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("📈 SSG Dashboard").size(20.0).strong());
                ui.label(
                    egui::RichText::new("Seaport freight rates")
                        .size(11.0)
                        .color(egui::Color32::GRAY),
                );
            });
            ui.add_space(6.0);
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.add_space(2.0);
            ui.label(
                egui::RichText::new("Copyright © 2021 SSG Dashboard by Auxburgo")
                    .size(10.0)
                    .color(egui::Color32::GRAY),
            );
            ui.add_space(2.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.is_loading {
                ui.centered_and_justified(|ui| {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label("Loading...");
                    });
                });
                return;
            }

            let action = self
                .route_panel
                .show(ui, self.is_fetching, self.api_error.as_deref());

            match action {
                RoutePanelAction::Pick(end) => {
                    self.api_error = None;
                    // The dialog cannot open before the directory arrived.
                    if !self.seaports.is_empty() {
                        self.port_picker.open_for(end);
                    }
                }
                RoutePanelAction::Swap => {
                    self.api_error = None;
                    self.route_panel.route.swap();
                }
                RoutePanelAction::Search => self.start_rates_fetch(),
                RoutePanelAction::Clear => self.handle_clear(),
                RoutePanelAction::DismissError => self.api_error = None,
                RoutePanelAction::None => {}
            }

            ui.add_space(12.0);

            let state = ChartViewState {
                decomposition: &self.decomposition,
                is_fetching: self.is_fetching,
                has_error: self.api_error.is_some(),
                has_fetched: self.has_fetched,
                export_enabled: self.route_panel.route.search_enabled(),
            };
            if self.chart_view.show(ui, &state) == ChartViewAction::ExportPng {
                self.handle_export();
            }
        });

        if let Some((end, port)) =
            self.port_picker
                .show(ctx, &self.seaports, &self.route_panel.route)
        {
            match end {
                RouteEnd::From => self.route_panel.route.select_from(port),
                RouteEnd::To => self.route_panel.route.select_to(port),
            }
        }
    }
}
