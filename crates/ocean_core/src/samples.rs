//! Fixed demo data shown by a seeded session.

use chrono::{DateTime, TimeDelta, Utc};

use crate::history::{HistoryItem, QueryCategory};
use crate::jobs::{JobStatus, ProcessingJob};
use crate::status::{ComponentStatus, SystemComponent};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Ids are reassigned by the job board when the samples are loaded.
pub(crate) fn sample_jobs(now: DateTime<Utc>) -> Vec<ProcessingJob> {
    vec![
        ProcessingJob {
            id: 0,
            filename: "ARGO_2024_001_temperature.nc".to_string(),
            status: JobStatus::Completed,
            progress: 100,
            size: "45.2 MB".to_string(),
            start_time: Some(now - TimeDelta::minutes(10)),
            end_time: Some(now - TimeDelta::minutes(8)),
            records_processed: Some(12_543),
            error_message: None,
        },
        ProcessingJob {
            id: 0,
            filename: "biogeochemical_sensors_pacific.nc".to_string(),
            status: JobStatus::Processing,
            progress: 67,
            size: "128.7 MB".to_string(),
            start_time: Some(now - TimeDelta::minutes(3)),
            end_time: None,
            records_processed: Some(8_721),
            error_message: None,
        },
        ProcessingJob {
            id: 0,
            filename: "salinity_data_atlantic_2024.nc".to_string(),
            status: JobStatus::Pending,
            progress: 0,
            size: "89.1 MB".to_string(),
            start_time: None,
            end_time: None,
            records_processed: None,
            error_message: None,
        },
    ]
}

pub(crate) fn sample_history(now: DateTime<Utc>) -> Vec<HistoryItem> {
    vec![
        HistoryItem {
            id: 1,
            query: "Show temperature profiles for the North Atlantic Ocean".to_string(),
            response: "Based on recent ARGO float data from the North Atlantic, I found \
                       temperature profiles showing typical seasonal thermocline patterns..."
                .to_string(),
            timestamp: now - TimeDelta::hours(2),
            duration_ms: 1200,
            sources: strings(&[
                "ARGO Float #4902567",
                "Temperature Atlas 2024",
                "North Atlantic Dataset",
            ]),
            starred: true,
            category: QueryCategory::Temperature,
        },
        HistoryItem {
            id: 2,
            query: "What is the average salinity in the Pacific at 1000m depth?".to_string(),
            response: "The average salinity at 1000m depth in the Pacific Ocean is \
                       approximately 34.5 PSU, with regional variations..."
                .to_string(),
            timestamp: now - TimeDelta::hours(4),
            duration_ms: 800,
            sources: strings(&["Pacific Salinity Database", "ARGO Float Network"]),
            starred: false,
            category: QueryCategory::Salinity,
        },
        HistoryItem {
            id: 3,
            query: "Generate a T-S diagram for recent data".to_string(),
            response: "I've generated a Temperature-Salinity diagram using the most recent \
                       oceanographic measurements..."
                .to_string(),
            timestamp: now - TimeDelta::days(1),
            duration_ms: 2100,
            sources: strings(&[
                "Recent ARGO Data",
                "Biogeochemical Sensors",
                "Quality Control Dataset",
            ]),
            starred: true,
            category: QueryCategory::Visualization,
        },
        HistoryItem {
            id: 4,
            query: "Explain ocean acidification trends in the last decade".to_string(),
            response: "Ocean acidification has continued to increase over the past decade, \
                       with pH levels decreasing by approximately..."
                .to_string(),
            timestamp: now - TimeDelta::days(2),
            duration_ms: 1500,
            sources: strings(&[
                "Ocean Chemistry Reports",
                "pH Monitoring Network",
                "Climate Research Papers",
            ]),
            starred: false,
            category: QueryCategory::General,
        },
        HistoryItem {
            id: 5,
            query: "Compare temperature data between 500m and 1500m depth".to_string(),
            response: "The temperature comparison between 500m and 1500m depths shows \
                       significant stratification patterns..."
                .to_string(),
            timestamp: now - TimeDelta::days(3),
            duration_ms: 1800,
            sources: strings(&[
                "Depth Profile Database",
                "Temperature Measurements",
                "Statistical Analysis",
            ]),
            starred: false,
            category: QueryCategory::Depth,
        },
    ]
}

pub(crate) fn system_components() -> Vec<SystemComponent> {
    let component = |name: &str,
                     status: ComponentStatus,
                     uptime: &str,
                     response_time: Option<&str>,
                     load: u8,
                     memory: Option<u8>,
                     details: &str| SystemComponent {
        name: name.to_string(),
        status,
        uptime: uptime.to_string(),
        response_time: response_time.map(str::to_string),
        load: Some(load),
        memory,
        details: details.to_string(),
    };

    vec![
        component(
            "OceanGPT LLM",
            ComponentStatus::Online,
            "99.8%",
            Some("1.2s"),
            45,
            None,
            "Natural language processing model running optimally",
        ),
        component(
            "FAISS Vector Database",
            ComponentStatus::Online,
            "99.9%",
            Some("0.3s"),
            28,
            Some(67),
            "Semantic search index with 1.2M embeddings",
        ),
        component(
            "PostgreSQL Database",
            ComponentStatus::Online,
            "99.7%",
            Some("0.8s"),
            32,
            Some(54),
            "2.4M oceanographic records, 156GB data",
        ),
        component(
            "FastAPI Backend",
            ComponentStatus::Online,
            "99.6%",
            Some("0.1s"),
            15,
            None,
            "REST API serving 847 requests/min",
        ),
        component(
            "MCP Orchestrator",
            ComponentStatus::Warning,
            "98.2%",
            Some("2.1s"),
            78,
            None,
            "High load detected, monitoring performance",
        ),
        component(
            "Data Processing Pipeline",
            ComponentStatus::Online,
            "97.8%",
            None,
            23,
            None,
            "Processing 47 NetCDF files in queue",
        ),
    ]
}
