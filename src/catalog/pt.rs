// SPDX-License-Identifier: PMPL-1.0-or-later

//! Portuguese curated translations.

use super::StaticSection;

pub(crate) const PT: &[StaticSection] = &[
    StaticSection {
        name: "dashboard",
        labels: &[
            ("title", "Painel de Métricas de Desempenho"),
            ("subtitle", "Monitorar e analisar métricas de desempenho de rotas"),
            ("advanced_statistics", "Estatísticas Avançadas"),
            ("export_csv", "Exportar CSV"),
            ("export_json", "Exportar JSON"),
            ("clear_all_records", "Limpar Todos os Registros"),
            ("back_to_dashboard", "Voltar ao Painel"),
            ("no_routes_found", "Nenhuma rota encontrada para os filtros selecionados."),
        ],
    },
    StaticSection {
        name: "statistics",
        labels: &[
            ("total_routes", "Total de Rotas"),
            ("total_queries", "Total de Consultas"),
            ("avg_request_time", "Tempo Médio de Solicitação"),
            ("max_request_time", "Tempo Máximo de Solicitação"),
            ("avg_query_time", "Tempo Médio de Consulta"),
            ("max_query_time", "Tempo Máximo de Consulta"),
            ("max_queries", "Máximo de Consultas"),
            ("not_available", "N/D"),
        ],
    },
    StaticSection {
        name: "routes_table",
        labels: &[
            ("title", "Rotas"),
            ("route_name", "Nome da Rota"),
            ("environment", "Ambiente"),
            ("request_time", "Tempo de Solicitação"),
            ("query_time", "Tempo de Consulta"),
            ("total_queries", "Total de Consultas"),
            ("memory_usage", "Uso de Memória"),
            ("access_count", "Número de Acessos"),
            ("last_accessed_at", "Último Acesso"),
            ("updated_at", "Atualizado"),
            ("review_status", "Status de Revisão"),
            ("actions", "Ações"),
            ("reviewed", "Revisado"),
            ("not_reviewed", "Não Revisado"),
            ("queries_improved", "Consultas: ✓ Melhorado"),
            ("queries_not_improved", "Consultas: ✗ Não Melhorado"),
            ("time_improved", "Tempo: ✓ Melhorado"),
            ("time_not_improved", "Tempo: ✗ Não Melhorado"),
            ("delete_record", "Excluir registro"),
            ("mark_as_reviewed", "Marcar como revisado"),
            ("delete", "Excluir"),
            ("review", "Revisar"),
            ("cancel", "Cancelar"),
            ("confirm_delete", "Tem certeza de que deseja excluir este registro?"),
        ],
    },
    StaticSection {
        name: "filters",
        labels: &[
            ("title", "Filtros"),
            ("show_advanced", "Mostrar Filtros Avançados"),
            ("hide_advanced", "Ocultar Filtros Avançados"),
            ("advanced_filters", "Filtros Avançados"),
            ("environment", "Ambiente"),
            ("route_name", "Nome da Rota"),
            ("sort_by", "Ordenar Por"),
            ("order", "Ordem"),
            ("limit", "Limite"),
            ("min_request_time", "Tempo Mín de Solicitação (s)"),
            ("max_request_time", "Tempo Máx de Solicitação (s)"),
            ("min_query_count", "Número Mín de Consultas"),
            ("max_query_count", "Número Máx de Consultas"),
            ("date_from", "Data De"),
            ("date_to", "Data Até"),
            ("apply_filters", "Aplicar Filtros"),
            ("reset", "Redefinir"),
            ("placeholder_route", "Filtrar por nome da rota..."),
            ("placeholder_time", "0.0000"),
            ("placeholder_count", "0"),
        ],
    },
    StaticSection {
        name: "review",
        labels: &[
            ("modal_title", "Marcar como Revisado"),
            ("queries_improved", "Consultas Melhoradas?"),
            ("time_improved", "Tempo Melhorado?"),
            ("not_specified", "Não especificado"),
            ("yes", "Sim"),
            ("no", "Não"),
            ("mark_as_reviewed", "Marcar como Revisado"),
        ],
    },
    StaticSection {
        name: "confirmations",
        labels: &[
            (
                "clear_all_records",
                "Tem certeza de que deseja excluir todos os registros de desempenho? Esta ação não pode ser desfeita.",
            ),
            ("delete_record", "Tem certeza de que deseja excluir este registro?"),
        ],
    },
    StaticSection {
        name: "flash",
        labels: &[
            ("records_cleared", "Todos os registros foram excluídos com sucesso."),
            ("record_deleted", "O registro foi excluído com sucesso."),
            ("record_reviewed", "O registro foi marcado como revisado com sucesso."),
            ("error", "Ocorreu um erro ao processar a solicitação."),
        ],
    },
    StaticSection {
        name: "statistics_page",
        labels: &[
            ("title", "Estatísticas Avançadas de Desempenho"),
            ("subtitle", "Análise estatística detalhada para identificar alvos de otimização"),
            ("routes_needing_attention", "Rotas que Precisam de Atenção"),
            ("routes_above_p95", "Rotas acima do percentil 95"),
            ("routes_with_outliers", "Rotas com valores atípicos"),
            ("metric", "Métrica"),
            ("mean", "Média"),
            ("median", "Mediana"),
            ("mode", "Moda"),
            ("std_deviation", "Desvio Padrão"),
            ("min", "Min"),
            ("max", "Max"),
            ("range", "Intervalo"),
            ("p25", "P25"),
            ("p50", "P50"),
            ("p75", "P75"),
            ("p90", "P90"),
            ("p95", "P95"),
            ("p99", "P99"),
            ("outliers", "Valores Atípicos"),
            ("histogram", "Histograma de Distribuição"),
            ("request_time", "Tempo de Solicitação"),
            ("query_time", "Tempo de Consulta"),
            ("query_count", "Número de Consultas"),
            ("memory_usage", "Uso de Memória"),
            ("access_count", "Número de Acessos"),
        ],
    },
    StaticSection {
        name: "sort_options",
        labels: &[
            ("request_time", "Tempo de Solicitação"),
            ("query_time", "Tempo de Consulta"),
            ("queries", "Consultas"),
            ("access_count", "Número de Acessos"),
            ("route_name", "Nome da Rota"),
        ],
    },
    StaticSection {
        name: "order_options",
        labels: &[
            ("descending", "Decrescente"),
            ("ascending", "Crescente"),
        ],
    },
];
